use crate::domain::ports::Transport;
use crate::error::{RelayError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A request captured by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// What a [`RecordingTransport`] answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    Body(Vec<u8>),
    Status(u16, String),
    Unreachable,
}

/// Transport that never touches the network.
///
/// Every request is kept for inspection and answered with a canned reply.
/// Clones share the same log.
#[derive(Clone)]
pub struct RecordingTransport {
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
    reply: Reply,
}

impl RecordingTransport {
    pub fn new(reply: Reply) -> Self {
        Self {
            requests: Arc::default(),
            reply,
        }
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn post(&self, url: &str, headers: &[(&str, &str)], body: Vec<u8>) -> Result<Vec<u8>> {
        self.requests.write().await.push(RecordedRequest {
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body,
        });

        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Status(code, reason) => Err(RelayError::HttpStatus {
                code: *code,
                reason: reason.clone(),
            }),
            Reply::Unreachable => Err(RelayError::IoError(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))),
        }
    }
}

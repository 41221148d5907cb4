use crate::domain::ports::Transport;
use crate::error::{RelayError, Result};
use async_trait::async_trait;
use std::time::Duration;

/// `reqwest`-backed transport for the checkout API.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &str, headers: &[(&str, &str)], body: Vec<u8>) -> Result<Vec<u8>> {
        let mut request = self.client.post(url).body(body);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let res = request.send().await?;
        let status = res.status();
        tracing::debug!(%url, status = status.as_u16(), "Checkout API replied");
        if !status.is_success() {
            return Err(RelayError::HttpStatus {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        Ok(res.bytes().await?.to_vec())
    }
}

use crate::error::Result;
use async_trait::async_trait;

/// Outbound HTTP seam.
///
/// A non-2xx reply is reported as `RelayError::HttpStatus`; any other failure
/// to get a reply is an error of the implementation's choosing.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, url: &str, headers: &[(&str, &str)], body: Vec<u8>) -> Result<Vec<u8>>;
}

pub type TransportBox = Box<dyn Transport>;

use crate::domain::request::FormData;
use crate::error::Result;

/// Outbound body and how it is encoded.
#[derive(Debug, Clone, Copy)]
pub enum Payload<'a> {
    Json(&'a FormData),
    /// Flat string fields only; nested objects fail to encode.
    FormUrlEncoded(&'a FormData),
    Raw(&'a [u8]),
}

impl Payload<'_> {
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json(_) => "application/json",
            Self::FormUrlEncoded(_) => "application/x-www-form-urlencoded",
            Self::Raw(_) => "application/octet-stream",
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(match self {
            Self::Json(data) => serde_json::to_vec(data)?,
            Self::FormUrlEncoded(data) => serde_urlencoded::to_string(data)?.into_bytes(),
            Self::Raw(bytes) => bytes.to_vec(),
        })
    }
}

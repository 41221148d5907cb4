use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Form encoding error: {0}")]
    FormError(#[from] serde_urlencoded::ser::Error),
    #[error("Query string error: {0}")]
    QueryError(#[from] serde_urlencoded::de::Error),
    #[error("Merchant Account {0} not found in credentials.csv")]
    MerchantNotFound(String),
    #[error("'{0}'")]
    MissingField(String),
    #[error("field '{0}' is not an object")]
    NotAnObject(String),
    #[error("'{0}'")]
    UnknownEndpoint(String),
    #[error("HTTP Error {code}: {reason}")]
    HttpStatus { code: u16, reason: String },
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, RelayError>;

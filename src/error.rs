use thiserror::Error;

pub type Result<T> = std::result::Result<T, FulfillmentError>;

#[derive(Error, Debug)]
pub enum FulfillmentError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("No payment processor supports method '{0}'")]
    UnsupportedPaymentMethod(String),
    #[error("Tracking number '{0}' not found")]
    TrackingNotFound(String),
    #[error("Invalid carrier timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Internal error: {0}")]
    InternalError(Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for FulfillmentError {
    fn from(err: rocksdb::Error) -> Self {
        Self::InternalError(Box::new(err))
    }
}

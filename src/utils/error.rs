use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("upstream returned {status} for {endpoint}")]
    UpstreamStatus {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("no {kind} with id {id}")]
    NotFound { kind: &'static str, id: u32 },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

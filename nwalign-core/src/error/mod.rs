//! Core error types for nwalign

use thiserror::Error;

/// Main error type for nwalign operations
#[derive(Error, Debug)]
pub enum NwError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Traceback error: {0}")]
    Traceback(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for nwalign operations
pub type NwResult<T> = Result<T, NwError>;

impl From<serde_json::Error> for NwError {
    fn from(err: serde_json::Error) -> Self {
        NwError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for NwError {
    fn from(err: anyhow::Error) -> Self {
        NwError::Other(err.to_string())
    }
}

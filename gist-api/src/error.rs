//! API error types

use gist_engine::EngineError;
use std::string::FromUtf8Error;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Input is not valid text
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Why the input was rejected
        reason: String,
    },

    /// Configuration rejected at construction time; configuration
    /// never fails per-call
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error reading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Engine layer error
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Output serialization failed
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<FromUtf8Error> for ApiError {
    fn from(err: FromUtf8Error) -> Self {
        ApiError::InvalidInput {
            reason: err.to_string(),
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

//! Engine error types

use gist_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core algorithm error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Chunk plan does not line up with the sentence sequence
    #[error("invalid chunk plan: {reason}")]
    InvalidChunkPlan {
        /// What the plan got wrong
        reason: String,
    },

    /// Configuration error, fatal at construction time
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

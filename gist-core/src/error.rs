//! Core error types

use thiserror::Error;

/// Errors from the algorithm core
///
/// All core errors are configuration-time failures. Degenerate text
/// (empty, single word, no punctuation) is handled by policy and never
/// produces an error.
#[derive(Error, Debug)]
pub enum CoreError {
    /// No built-in stop-word list for the requested language
    #[error("language '{code}' not supported")]
    UnsupportedLanguage {
        /// The language code that has no built-in list
        code: String,
    },

    /// Custom stop-word lists must contain non-empty normalized terms
    #[error("stop word at index {index} is empty after normalization")]
    EmptyStopWord {
        /// Position of the offending entry in the caller's list
        index: usize,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

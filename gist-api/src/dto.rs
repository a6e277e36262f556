//! Data Transfer Objects for the API

use crate::error::Result;
use gist_engine::ExecutionMode;
use std::fs;
use std::path::PathBuf;

/// Input source for summarization.
///
/// The engine itself never touches files; file reading happens here,
/// in the API layer, before the text crosses into the pipeline.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path, read as UTF-8
    File(PathBuf),
    /// Raw bytes, validated as UTF-8
    Bytes(Vec<u8>),
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => Ok(fs::read_to_string(&path)?),
            Input::Bytes(bytes) => Ok(String::from_utf8(bytes)?),
        }
    }
}

/// Processing metadata with runtime statistics
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Sentence count of the input document
    pub sentences_total: usize,
    /// Sentence count of the summary
    pub sentences_kept: usize,
    /// Reduction factor after clamping
    pub reduction_factor: f64,
    /// Execution mode that actually ran
    pub mode_used: ExecutionMode,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Complete output with summary text and metadata
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// The extracted summary
    pub summary: String,
    /// Processing metadata
    pub metadata: Metadata,
}

#[cfg(feature = "serde")]
impl Output {
    /// Serialize the output, metadata included, to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

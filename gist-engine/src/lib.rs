//! Execution orchestration for gist extractive summarization
//!
//! This crate wraps the gist-core algorithms with execution
//! strategies: a sequential path, a chunked parallel path that must
//! stay byte-identical to it, and the dispatcher that chooses between
//! them.

#![warn(missing_docs)]

pub mod chunker;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod executor;
pub mod pipeline;

// Re-export key types
pub use config::EngineConfig;
pub use dispatcher::Dispatcher;
pub use error::{EngineError, Result};
#[cfg(feature = "parallel")]
pub use executor::ParallelExecutor;
pub use executor::{auto_select, ExecutionMode, Executor, SequentialExecutor};
pub use pipeline::{SummaryPipeline, SummaryRun};

// Re-export from core for convenience
pub use gist_core::{LanguageProfile, ScoredSentence, Sentence};

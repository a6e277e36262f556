//! Public API for gist extractive text summarization
//!
//! The engine selects a subset of the input's sentences, sized by a
//! reduction factor in [0, 1] that gives the fraction of sentences to
//! keep. Two entry points exist: [`summarize`] runs single-threaded,
//! [`par_summarize`] scores sentences across cores; both return
//! byte-identical output for the same input.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use gist_engine::SummaryPipeline;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Input, Metadata, Output};
pub use error::{ApiError, Result};
pub use gist_engine::ExecutionMode as Mode;

/// Main entry point for extractive summarization.
///
/// A summarizer is cheap to reuse across calls: the stop-word profile
/// is built once here, while every call rebuilds its own term-weight
/// table (no state leaks between documents).
pub struct Summarizer {
    pipeline: Arc<SummaryPipeline>,
    config: Config,
}

impl Summarizer {
    /// Create a summarizer with the default configuration (English
    /// stop words, automatic mode selection)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a summarizer with a specific built-in stop-word language
    pub fn with_language(lang_code: &str) -> Result<Self> {
        Self::with_config(Config::builder().language(lang_code).build()?)
    }

    /// Create a summarizer with a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let profile = config.build_profile()?;
        let pipeline = SummaryPipeline::new(config.to_engine_config(), profile);
        Ok(Self {
            pipeline: Arc::new(pipeline),
            config,
        })
    }

    /// Summarize an input and return the summary with metadata
    pub fn summarize(&self, input: Input, reduction_factor: f64) -> Result<Output> {
        let start = Instant::now();
        let text = input.read_text()?;
        let run = self.pipeline.run(&text, reduction_factor)?;
        let elapsed = start.elapsed();
        debug!(
            total = run.sentences_total,
            kept = run.sentences_kept,
            elapsed_ms = elapsed.as_millis() as u64,
            "summarization complete"
        );

        Ok(Output {
            summary: run.summary,
            metadata: Metadata {
                sentences_total: run.sentences_total,
                sentences_kept: run.sentences_kept,
                reduction_factor: clamp_factor(reduction_factor),
                mode_used: run.mode_used,
                processing_time_ms: elapsed.as_millis() as u64,
            },
        })
    }

    /// Summarize text directly and return only the summary
    pub fn summarize_text(&self, text: &str, reduction_factor: f64) -> Result<String> {
        Ok(self.pipeline.summarize(text, reduction_factor)?)
    }

    /// The configuration this summarizer was built with
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new().expect("default summarizer creation should not fail")
    }
}

/// Extract a summary sequentially.
///
/// `reduction_factor` is the fraction of sentences to keep; it is
/// clamped to [0, 1]. Empty input returns an empty summary.
pub fn summarize(text: &str, reduction_factor: f64) -> Result<String> {
    let summarizer = Summarizer::with_config(Config::sequential())?;
    summarizer.summarize_text(text, reduction_factor)
}

/// Extract a summary using all available cores.
///
/// Output is byte-identical to [`summarize`] for the same input; small
/// documents fall back to the sequential path outright.
pub fn par_summarize(text: &str, reduction_factor: f64) -> Result<String> {
    let summarizer = Summarizer::with_config(Config::parallel())?;
    summarizer.summarize_text(text, reduction_factor)
}

fn clamp_factor(reduction_factor: f64) -> f64 {
    if reduction_factor.is_nan() {
        0.0
    } else {
        reduction_factor.clamp(0.0, 1.0)
    }
}

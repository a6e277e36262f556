//! Execution dispatcher
//!
//! Holds one executor per strategy and routes each call, degrading to
//! the sequential path when only one worker is available or the
//! document is below the chunking threshold. The two strategies are a
//! tagged choice behind the same [`Executor`] contract, not a class
//! hierarchy.

use crate::{
    config::EngineConfig,
    error::Result,
    executor::{auto_select, ExecutionMode, Executor, SequentialExecutor},
};
use gist_core::{LanguageProfile, ScoredSentence, Sentence};
use tracing::debug;

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Routes scoring to the sequential or parallel executor
pub struct Dispatcher {
    sequential: SequentialExecutor,
    #[cfg(feature = "parallel")]
    parallel: ParallelExecutor,
    config: EngineConfig,
}

impl Dispatcher {
    /// Create a dispatcher for the given configuration
    pub fn new(config: EngineConfig) -> Self {
        Self {
            sequential: SequentialExecutor,
            #[cfg(feature = "parallel")]
            parallel: ParallelExecutor::new(config.worker_count()),
            config,
        }
    }

    /// Resolve the mode that will actually run for a sentence count.
    ///
    /// Both `Auto` and an explicit `Parallel` request pass through the
    /// degradation guard; `Sequential` is always honored as-is.
    pub fn resolve_mode(&self, sentence_count: usize) -> ExecutionMode {
        match self.config.execution_mode {
            ExecutionMode::Sequential => ExecutionMode::Sequential,
            ExecutionMode::Parallel | ExecutionMode::Auto => auto_select(
                sentence_count,
                self.config.min_parallel_sentences,
                self.config.worker_count(),
            ),
        }
    }

    /// Score the document's sentences, reporting the mode that ran
    pub fn score(
        &self,
        document: &str,
        sentences: &[Sentence],
        profile: &LanguageProfile,
    ) -> Result<(Vec<ScoredSentence>, ExecutionMode)> {
        let mode = self.resolve_mode(sentences.len());
        debug!(?mode, sentences = sentences.len(), "dispatching");

        let scored = match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => self.parallel.score(document, sentences, profile)?,
            _ => self.sequential.score(document, sentences, profile)?,
        };
        Ok((scored, mode))
    }

    /// The configuration this dispatcher was built with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

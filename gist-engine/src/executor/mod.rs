//! Execution strategies for the scoring pipeline
//!
//! An executor turns segmented sentences into per-sentence scores. The
//! selector runs outside the executor and is identical for every
//! strategy, which is what pins the two paths to the same output.

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

use crate::error::Result;
use gist_core::{LanguageProfile, ScoredSentence, Sentence};

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExecutionMode {
    /// Single-threaded scoring
    Sequential,
    /// Chunked multi-threaded scoring
    Parallel,
    /// Choose by sentence count and worker availability
    Auto,
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Score every sentence of the document, in ordinal order
    fn score(
        &self,
        document: &str,
        sentences: &[Sentence],
        profile: &LanguageProfile,
    ) -> Result<Vec<ScoredSentence>>;

    /// The mode this executor implements
    fn mode(&self) -> ExecutionMode;
}

/// Resolve the mode to run for a given document.
///
/// Parallel only pays off past a minimum sentence count and with more
/// than one worker; everything else degrades to sequential. Without
/// the `parallel` feature this always resolves to sequential.
pub fn auto_select(sentence_count: usize, min_parallel: usize, workers: usize) -> ExecutionMode {
    if workers <= 1 || sentence_count < min_parallel {
        return ExecutionMode::Sequential;
    }

    #[cfg(feature = "parallel")]
    return ExecutionMode::Parallel;

    #[cfg(not(feature = "parallel"))]
    ExecutionMode::Sequential
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_inputs_stay_sequential() {
        assert_eq!(auto_select(10, 64, 8), ExecutionMode::Sequential);
    }

    #[test]
    fn single_worker_stays_sequential() {
        assert_eq!(auto_select(10_000, 64, 1), ExecutionMode::Sequential);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn large_inputs_go_parallel() {
        assert_eq!(auto_select(10_000, 64, 8), ExecutionMode::Parallel);
    }
}

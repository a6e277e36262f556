//! Parallel execution strategy
//!
//! Three phases over a static contiguous partition of the sentence
//! sequence:
//!
//! 1. each worker tokenizes its chunk and builds a local term-count
//!    map;
//! 2. the local maps are folded into one document-wide map (additive
//!    over integers, so the merged counts match a sequential count in
//!    any order) and normalized once into the shared weight table;
//! 3. each worker scores its chunk against the read-only table, and
//!    the gather concatenates chunk results back into ordinal order.
//!
//! The rayon collect points are the two barriers: no weight table is
//! published before all counting finishes, and no selection happens
//! before all scoring finishes. The worker count fixes the partition,
//! not the thread pool, so output is independent of scheduling.

use crate::{
    chunker::partition,
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor},
};
use gist_core::{
    score_sentences, tokenize, LanguageProfile, ScoredSentence, Sentence, TermCounts, TermWeights,
    TokenList,
};
use rayon::prelude::*;
use std::ops::Range;
use tracing::debug;

/// Per-chunk result of the counting phase
struct ChunkScan {
    range: Range<usize>,
    token_lists: Vec<TokenList>,
    counts: TermCounts,
}

/// Chunked multi-threaded executor.
///
/// Produces output byte-identical to [`SequentialExecutor`] for every
/// input and worker count.
///
/// [`SequentialExecutor`]: crate::executor::SequentialExecutor
#[derive(Debug)]
pub struct ParallelExecutor {
    workers: usize,
}

impl ParallelExecutor {
    /// Create an executor with a fixed worker count
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    fn score_parallel(
        &self,
        document: &str,
        sentences: &[Sentence],
        profile: &LanguageProfile,
    ) -> Result<Vec<ScoredSentence>> {
        let ranges = partition(sentences.len(), self.workers);
        debug!(
            sentences = sentences.len(),
            chunks = ranges.len(),
            "parallel scoring"
        );

        // Phase 1: per-chunk tokenization and local counts
        let mut scans: Vec<ChunkScan> = ranges
            .into_par_iter()
            .map(|range| {
                let token_lists: Vec<TokenList> = sentences[range.clone()]
                    .iter()
                    .map(|sentence| tokenize(document, sentence))
                    .collect();
                let mut counts = TermCounts::new();
                for tokens in &token_lists {
                    counts.observe(tokens, profile);
                }
                ChunkScan {
                    range,
                    token_lists,
                    counts,
                }
            })
            .collect();

        // Phase 2: fold local counts and publish the weight table once
        let mut merged = TermCounts::new();
        for scan in &mut scans {
            merged.absorb(std::mem::take(&mut scan.counts));
        }
        debug!(terms = merged.len(), "local counts merged");
        let weights = TermWeights::from_counts(merged);

        // Phase 3: score chunks against the read-only table
        let scored: Vec<Vec<ScoredSentence>> = scans
            .par_iter()
            .map(|scan| score_sentences(&scan.token_lists, scan.range.start, &weights))
            .collect();

        // Gather: chunk ranges are ascending and contiguous, so plain
        // concatenation restores ordinal order
        let gathered: Vec<ScoredSentence> = scored.into_iter().flatten().collect();
        if gathered.len() != sentences.len() {
            return Err(EngineError::InvalidChunkPlan {
                reason: format!(
                    "gathered {} scores for {} sentences",
                    gathered.len(),
                    sentences.len()
                ),
            });
        }

        Ok(gathered)
    }
}

impl Executor for ParallelExecutor {
    fn score(
        &self,
        document: &str,
        sentences: &[Sentence],
        profile: &LanguageProfile,
    ) -> Result<Vec<ScoredSentence>> {
        if sentences.is_empty() {
            return Ok(Vec::new());
        }
        self.score_parallel(document, sentences, profile)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}

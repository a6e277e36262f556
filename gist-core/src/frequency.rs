//! Document-wide term weighting
//!
//! Weights are raw occurrence counts normalized by the maximum count of
//! any non-stop-word term, so the most frequent term has weight 1.0 and
//! all weights fall in (0, 1]. Counts are integers: merging partial
//! counts from parallel workers is exact in any order, which is what
//! keeps the parallel path bit-identical to the sequential one.

use crate::profile::LanguageProfile;
use crate::types::TokenList;
use rustc_hash::FxHashMap;

/// Raw occurrence counts for non-stop-word terms.
#[derive(Debug, Clone, Default)]
pub struct TermCounts {
    counts: FxHashMap<String, u64>,
}

impl TermCounts {
    /// Empty count map
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the tokens of one sentence, skipping stop words
    pub fn observe(&mut self, tokens: &TokenList, profile: &LanguageProfile) {
        for token in tokens {
            if profile.is_stop_word(&token.norm) {
                continue;
            }
            *self.counts.entry(token.norm.clone()).or_insert(0) += 1;
        }
    }

    /// Additive merge of another partial count map.
    ///
    /// Commutative and associative, so the reduction order across
    /// workers does not affect the result.
    pub fn absorb(&mut self, other: TermCounts) {
        for (term, count) in other.counts {
            *self.counts.entry(term).or_insert(0) += count;
        }
    }

    /// Number of distinct terms counted
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no terms were counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    fn max_count(&self) -> u64 {
        self.counts.values().copied().max().unwrap_or(0)
    }
}

/// Immutable term-to-weight table, built once per summarization call
/// and shared read-only by all scoring.
#[derive(Debug, Clone, Default)]
pub struct TermWeights {
    weights: FxHashMap<String, f64>,
}

impl TermWeights {
    /// Normalize counts into weights.
    ///
    /// A document with zero non-stop-word terms yields an empty table;
    /// every sentence then scores 0 and the selector's fallback rule
    /// still returns a non-empty summary.
    pub fn from_counts(counts: TermCounts) -> Self {
        let max = counts.max_count();
        if max == 0 {
            return Self::default();
        }
        let weights = counts
            .counts
            .into_iter()
            .map(|(term, count)| (term, count as f64 / max as f64))
            .collect();
        Self { weights }
    }

    /// Count and normalize in one step (the sequential path)
    pub fn build(token_lists: &[TokenList], profile: &LanguageProfile) -> Self {
        let mut counts = TermCounts::new();
        for tokens in token_lists {
            counts.observe(tokens, profile);
        }
        Self::from_counts(counts)
    }

    /// Weight of a normalized term.
    ///
    /// Stop words and unknown terms read as 0.
    pub fn get(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// Number of weighted terms
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

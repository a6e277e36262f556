//! Sentence scoring
//!
//! A sentence's score is the arithmetic mean of its tokens' term
//! weights. Stop words contribute 0 to the sum but still count in the
//! denominator, so sentences are not favored for being long or padded
//! with function words.

use crate::frequency::TermWeights;
use crate::types::{ScoredSentence, TokenList};

/// Score one sentence against the shared weight table.
///
/// A zero-token sentence scores 0.
pub fn score_sentence(tokens: &TokenList, weights: &TermWeights) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let sum: f64 = tokens.iter().map(|token| weights.get(&token.norm)).sum();
    sum / tokens.len() as f64
}

/// Score a run of sentences whose first ordinal is `first_ordinal`.
///
/// Both execution paths go through this: the sequential path passes the
/// whole document with `first_ordinal = 0`, the parallel path passes
/// one chunk at its offset. Per-sentence summation order is fixed by
/// the token order, so the two paths produce bit-identical scores.
pub fn score_sentences(
    token_lists: &[TokenList],
    first_ordinal: usize,
    weights: &TermWeights,
) -> Vec<ScoredSentence> {
    token_lists
        .iter()
        .enumerate()
        .map(|(offset, tokens)| ScoredSentence {
            ordinal: first_ordinal + offset,
            score: score_sentence(tokens, weights),
        })
        .collect()
}

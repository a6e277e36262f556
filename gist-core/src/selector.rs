//! Sentence selection
//!
//! Ranks scored sentences and keeps the top fraction given by the
//! reduction factor, then re-sorts the kept set into document order so
//! the summary reads coherently rather than as a ranked list.

use crate::types::ScoredSentence;
use std::cmp::Ordering;

/// Number of sentences to keep for a document of `total` sentences.
///
/// The reduction factor is the fraction of sentences to KEEP (larger
/// factor, longer summary) and is clamped to [0, 1]; NaN reads as 0.
/// The result is bounded below by 1 whenever the document is non-empty
/// and above by the sentence count.
pub fn keep_count(total: usize, reduction_factor: f64) -> usize {
    if total == 0 {
        return 0;
    }
    let factor = if reduction_factor.is_nan() {
        0.0
    } else {
        reduction_factor.clamp(0.0, 1.0)
    };
    let keep = (total as f64 * factor).ceil() as usize;
    keep.clamp(1, total)
}

// Total order: descending score, exact ties to the earlier ordinal.
// Must be total for the sort; both execution paths produce
// bit-identical scores, so exact comparison is already reproducible.
fn rank_order(a: &ScoredSentence, b: &ScoredSentence) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.ordinal.cmp(&b.ordinal))
}

/// Choose the ordinals to emit, in ascending document order.
pub fn select(scored: &[ScoredSentence], total: usize, reduction_factor: f64) -> Vec<usize> {
    let keep = keep_count(total, reduction_factor);
    if keep == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<&ScoredSentence> = scored.iter().collect();
    ranked.sort_by(|a, b| rank_order(a, b));

    let mut chosen: Vec<usize> = ranked.iter().take(keep).map(|s| s.ordinal).collect();
    chosen.sort_unstable();
    chosen
}

//! Sentence segmentation
//!
//! Boundary policy: a run of terminal punctuation (`.`, `!`, `?`)
//! followed by whitespace or end-of-text always ends a sentence. There
//! is no abbreviation or ellipsis exception list; the policy trades
//! NLP accuracy for a rule that is exact, reproducible, and safe to
//! evaluate on chunked input.

use crate::types::Sentence;

/// Sentence-terminal punctuation
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Check whether a character can terminate a sentence
pub fn is_terminator(ch: char) -> bool {
    TERMINATORS.contains(&ch)
}

/// Split a document into ordered sentence spans.
///
/// The returned spans are non-overlapping, strictly increasing, and
/// cover every non-whitespace character of the document. Empty or
/// whitespace-only input yields no sentences; input without terminal
/// punctuation is a single sentence covering the trimmed text.
pub fn segment(document: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut start: Option<usize> = None;
    // One past the last non-whitespace byte of the open sentence
    let mut end = 0usize;
    // Whether the last non-whitespace char was a terminator
    let mut terminated = false;

    for (idx, ch) in document.char_indices() {
        if ch.is_whitespace() {
            if terminated {
                if let Some(s) = start.take() {
                    sentences.push(Sentence {
                        start: s,
                        end,
                        ordinal: sentences.len(),
                    });
                }
                terminated = false;
            }
            continue;
        }

        if start.is_none() {
            start = Some(idx);
        }
        end = idx + ch.len_utf8();
        terminated = is_terminator(ch);
    }

    // End-of-text closes the open sentence whether or not it was
    // punctuated; this is what makes unpunctuated input one sentence.
    if let Some(s) = start {
        sentences.push(Sentence {
            start: s,
            end,
            ordinal: sentences.len(),
        });
    }

    sentences
}

//! Core data types shared across the summarization pipeline

use smallvec::SmallVec;

/// A sentence span within a document.
///
/// Sentences borrow from the document: they carry byte offsets, never
/// copied text. Spans produced by the segmenter are non-overlapping,
/// ordered, and cover all non-whitespace content of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence {
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// 0-based position in document order
    pub ordinal: usize,
}

impl Sentence {
    /// Resolve the span against the document it was segmented from
    pub fn text<'d>(&self, document: &'d str) -> &'d str {
        &document[self.start..self.end]
    }

    /// Span length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A normalized word token extracted from a sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Case-folded, punctuation-stripped form used for scoring
    pub norm: String,
    /// Byte offset of the original word in the document (diagnostics only)
    pub start: usize,
    /// Byte offset one past the original word (diagnostics only)
    pub end: usize,
}

/// Token storage for one sentence.
///
/// Most sentences hold a handful of tokens, so the common case stays
/// inline without a heap allocation for the list itself.
pub type TokenList = SmallVec<[Token; 8]>;

/// A sentence ordinal paired with its importance score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredSentence {
    /// 0-based position in document order
    pub ordinal: usize,
    /// Mean term weight over the sentence's tokens
    pub score: f64,
}

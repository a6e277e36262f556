//! Core extractive summarization algorithms
//!
//! This crate holds the single-threaded building blocks: sentence
//! segmentation, tokenization, document-wide term weighting, sentence
//! scoring, and selection. Execution strategies (sequential vs.
//! parallel) live in gist-engine and compose these pieces without
//! changing their semantics.

#![warn(missing_docs)]

pub mod error;
pub mod frequency;
pub mod profile;
pub mod scorer;
pub mod segmenter;
pub mod selector;
pub mod summary;
pub mod tokenizer;
pub mod types;

// Re-export key types
pub use error::{CoreError, Result};
pub use frequency::{TermCounts, TermWeights};
pub use profile::LanguageProfile;
pub use scorer::{score_sentence, score_sentences};
pub use segmenter::segment;
pub use selector::{keep_count, select};
pub use summary::render;
pub use tokenizer::tokenize;
pub use types::{ScoredSentence, Sentence, Token, TokenList};

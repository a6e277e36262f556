//! Word tokenization
//!
//! Tokens are produced by splitting a sentence on whitespace, stripping
//! leading and trailing non-alphanumeric characters, and case-folding.
//! Empty tokens are discarded. Original byte spans are kept for
//! diagnostics only; scoring uses the normalized form.

use crate::types::{Sentence, Token, TokenList};

/// Tokenize one sentence of the document.
///
/// Returned spans are absolute offsets into the document, pointing at
/// the stripped word before case-folding.
pub fn tokenize(document: &str, sentence: &Sentence) -> TokenList {
    let text = sentence.text(document);
    let mut tokens = TokenList::new();

    for word in text.split_whitespace() {
        let stripped = word.trim_matches(|c: char| !c.is_alphanumeric());
        if stripped.is_empty() {
            continue;
        }
        // Offset of the stripped slice within the sentence text
        let rel = stripped.as_ptr() as usize - text.as_ptr() as usize;
        tokens.push(Token {
            norm: stripped.to_lowercase(),
            start: sentence.start + rel,
            end: sentence.start + rel + stripped.len(),
        });
    }

    tokens
}

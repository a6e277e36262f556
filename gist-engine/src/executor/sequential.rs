//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMode, Executor},
};
use gist_core::{score_sentences, tokenize, LanguageProfile, ScoredSentence, Sentence, TermWeights, TokenList};

/// Single-threaded executor; the reference semantics for the parallel
/// path.
#[derive(Debug, Clone, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn score(
        &self,
        document: &str,
        sentences: &[Sentence],
        profile: &LanguageProfile,
    ) -> Result<Vec<ScoredSentence>> {
        let token_lists: Vec<TokenList> = sentences
            .iter()
            .map(|sentence| tokenize(document, sentence))
            .collect();

        let weights = TermWeights::build(&token_lists, profile);

        Ok(score_sentences(&token_lists, 0, &weights))
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gist_core::segment;

    #[test]
    fn scores_are_in_ordinal_order() {
        let doc = "A cat sat. A cat ran. The cat slept on the mat.";
        let sentences = segment(doc);
        let profile = LanguageProfile::for_language("en").unwrap();

        let scored = SequentialExecutor
            .score(doc, &sentences, &profile)
            .unwrap();

        assert_eq!(scored.len(), 3);
        let ordinals: Vec<usize> = scored.iter().map(|s| s.ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2]);
        // Short cat-heavy sentences outrank the diluted long one
        assert!(scored[0].score > scored[2].score);
    }
}

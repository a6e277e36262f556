//! End-to-end summarization pipeline
//!
//! Segmentation runs once and sequentially (boundary detection needs a
//! linear scan); the dispatcher parallelizes only the scoring phases;
//! selection and rendering run on the already-reduced score list.

use crate::{
    config::EngineConfig,
    dispatcher::Dispatcher,
    error::Result,
    executor::ExecutionMode,
};
use gist_core::{keep_count, render, segment, select, LanguageProfile};
use tracing::debug;

/// Outcome of one summarization call
#[derive(Debug, Clone)]
pub struct SummaryRun {
    /// The extracted summary text
    pub summary: String,
    /// Sentence count of the input document
    pub sentences_total: usize,
    /// Sentence count of the summary
    pub sentences_kept: usize,
    /// Execution mode that actually ran
    pub mode_used: ExecutionMode,
}

/// Reusable pipeline: dispatcher plus the language profile.
///
/// No state persists across calls; the weight table is rebuilt for
/// every document.
pub struct SummaryPipeline {
    dispatcher: Dispatcher,
    profile: LanguageProfile,
}

impl SummaryPipeline {
    /// Create a pipeline from a configuration and profile
    pub fn new(config: EngineConfig, profile: LanguageProfile) -> Self {
        Self {
            dispatcher: Dispatcher::new(config),
            profile,
        }
    }

    /// Summarize a document, keeping the given fraction of sentences.
    ///
    /// Empty and whitespace-only documents return an empty summary;
    /// out-of-range reduction factors are clamped, never rejected.
    pub fn run(&self, document: &str, reduction_factor: f64) -> Result<SummaryRun> {
        let sentences = segment(document);
        if sentences.is_empty() {
            return Ok(SummaryRun {
                summary: String::new(),
                sentences_total: 0,
                sentences_kept: 0,
                mode_used: ExecutionMode::Sequential,
            });
        }

        let (scored, mode_used) = self
            .dispatcher
            .score(document, &sentences, &self.profile)?;

        let chosen = select(&scored, sentences.len(), reduction_factor);
        debug!(
            total = sentences.len(),
            kept = chosen.len(),
            expected = keep_count(sentences.len(), reduction_factor),
            "selection complete"
        );

        Ok(SummaryRun {
            summary: render(document, &sentences, &chosen),
            sentences_total: sentences.len(),
            sentences_kept: chosen.len(),
            mode_used,
        })
    }

    /// Summarize and return only the text
    pub fn summarize(&self, document: &str, reduction_factor: f64) -> Result<String> {
        Ok(self.run(document, reduction_factor)?.summary)
    }

    /// The configuration behind this pipeline
    pub fn config(&self) -> &EngineConfig {
        self.dispatcher.config()
    }

    /// The stop-word profile behind this pipeline
    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline(config: EngineConfig) -> SummaryPipeline {
        SummaryPipeline::new(config, LanguageProfile::for_language("en").unwrap())
    }

    #[test]
    fn empty_document_is_an_empty_summary() {
        let run = pipeline(EngineConfig::default()).run("", 0.5).unwrap();
        assert_eq!(run.summary, "");
        assert_eq!(run.sentences_total, 0);
        assert_eq!(run.sentences_kept, 0);
    }

    #[test]
    fn single_sentence_survives_a_zero_factor() {
        let run = pipeline(EngineConfig::default())
            .run("Only one sentence here", 0.0)
            .unwrap();
        assert_eq!(run.summary, "Only one sentence here");
        assert_eq!(run.sentences_kept, 1);
    }

    #[test]
    fn kept_count_is_reported() {
        let doc = "One. Two. Three. Four. Five. Six. Seven. Eight. Nine. Ten.";
        let run = pipeline(EngineConfig::default()).run(doc, 0.6).unwrap();
        assert_eq!(run.sentences_total, 10);
        assert_eq!(run.sentences_kept, 6);
    }
}

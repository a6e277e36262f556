//! Summary rendering
//!
//! Re-emits the chosen sentences in document order. Where two emitted
//! sentences were adjacent in the document the original inter-sentence
//! gap is reused; a gap whose sentences were dropped collapses to a
//! single space. Full-document selection therefore reproduces the
//! trimmed document exactly.

use crate::types::Sentence;

/// Concatenate the chosen sentence ordinals into the output text.
///
/// `chosen` must be ascending ordinals into `sentences`, as produced by
/// the selector.
pub fn render(document: &str, sentences: &[Sentence], chosen: &[usize]) -> String {
    let mut out = String::new();
    let mut prev: Option<&Sentence> = None;

    for &ordinal in chosen {
        let sentence = &sentences[ordinal];
        if let Some(previous) = prev {
            if sentence.ordinal == previous.ordinal + 1 {
                out.push_str(&document[previous.end..sentence.start]);
            } else {
                out.push(' ');
            }
        }
        out.push_str(sentence.text(document));
        prev = Some(sentence);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::segment;

    #[test]
    fn full_selection_reproduces_the_trimmed_document() {
        let doc = "First one.  Second one!\nThird one?";
        let sentences = segment(doc);
        let all: Vec<usize> = (0..sentences.len()).collect();
        assert_eq!(render(doc, &sentences, &all), doc);
    }

    #[test]
    fn elided_gaps_collapse_to_a_single_space() {
        let doc = "Alpha one.  Beta two.  Gamma three.";
        let sentences = segment(doc);
        assert_eq!(
            render(doc, &sentences, &[0, 2]),
            "Alpha one. Gamma three."
        );
    }

    #[test]
    fn single_selection_is_the_sentence_verbatim() {
        let doc = "Alpha one. Beta two.";
        let sentences = segment(doc);
        assert_eq!(render(doc, &sentences, &[1]), "Beta two.");
    }

    #[test]
    fn empty_selection_renders_nothing() {
        let doc = "Alpha one.";
        let sentences = segment(doc);
        assert_eq!(render(doc, &sentences, &[]), "");
    }
}

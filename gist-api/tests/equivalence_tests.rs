//! Sequential/parallel equivalence and the scenario suite
//!
//! The parallel path must return byte-identical output to the
//! sequential path for every input, reduction factor, and worker
//! count.

use gist_api::{par_summarize, summarize, Config, Mode, Summarizer};

fn build_document(sentences: usize) -> String {
    let topics = [
        "harbor", "lighthouse", "ferry", "tide", "seawall", "buoy", "anchor",
    ];
    (0..sentences)
        .map(|i| {
            let topic = topics[i % topics.len()];
            format!("Log entry {i} mentions the {topic} and the {topic} inspection.")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn parallel_summarizer(workers: usize) -> Summarizer {
    Summarizer::with_config(
        Config::builder()
            .execution_mode(Mode::Parallel)
            .threads(Some(workers))
            .min_parallel_sentences(1)
            .build()
            .unwrap(),
    )
    .unwrap()
}

#[test]
fn parallel_output_is_byte_identical_across_worker_counts() {
    let doc = build_document(150);
    for factor in [0.0, 0.1, 0.33, 0.5, 0.9, 1.0] {
        let expected = summarize(&doc, factor).unwrap();
        for workers in [1, 2, 8] {
            let actual = parallel_summarizer(workers)
                .summarize_text(&doc, factor)
                .unwrap();
            assert_eq!(
                actual, expected,
                "diverged at factor {factor} with {workers} workers"
            );
        }
    }
}

#[test]
fn convenience_functions_agree() {
    let doc = build_document(200);
    for factor in [0.2, 0.5, 0.8] {
        assert_eq!(
            par_summarize(&doc, factor).unwrap(),
            summarize(&doc, factor).unwrap()
        );
    }
}

// Scenario A: the top-scoring sentence is returned verbatim. The
// cat-heavy short sentences tie on mean term weight and the earlier
// one wins.
#[test]
fn scenario_repeated_term_wins() {
    let text = "A cat sat. A cat ran. The cat slept on the mat.";
    assert_eq!(summarize(text, 0.3).unwrap(), "A cat sat.");
    assert_eq!(par_summarize(text, 0.3).unwrap(), "A cat sat.");
}

// Scenario B: empty input is an empty summary, not an error
#[test]
fn scenario_empty_input() {
    for factor in [0.0, 0.5, 1.0] {
        assert_eq!(summarize("", factor).unwrap(), "");
        assert_eq!(par_summarize("", factor).unwrap(), "");
    }
    assert_eq!(summarize("   \n\t  ", 0.5).unwrap(), "");
}

// Scenario C: a single sentence survives a zero factor unchanged
#[test]
fn scenario_single_sentence_zero_factor() {
    let text = "Just the one sentence, nothing else.";
    assert_eq!(summarize(text, 0.0).unwrap(), text);
    assert_eq!(par_summarize(text, 0.0).unwrap(), text);
}

// Scenario D: a full factor returns every sentence in original order
#[test]
fn scenario_full_factor_returns_everything() {
    let doc = build_document(100);
    assert_eq!(summarize(&doc, 1.0).unwrap(), doc);
    assert_eq!(par_summarize(&doc, 1.0).unwrap(), doc);
}

//! Basic tests for gist-engine

use gist_engine::*;

fn build_document(sentences: usize) -> String {
    let topics = ["parser", "index", "planner", "buffer", "socket", "cursor"];
    (0..sentences)
        .map(|i| {
            let topic = topics[i % topics.len()];
            format!("Entry {i} describes the {topic} layer and repeats {topic} twice.")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn engine_config_presets() {
    let config = EngineConfig::default();
    assert_eq!(config.min_parallel_sentences, 64);

    let sequential = EngineConfig::sequential();
    assert_eq!(sequential.threads, Some(1));
    assert_eq!(sequential.execution_mode, ExecutionMode::Sequential);

    let parallel = EngineConfig::parallel();
    assert_eq!(parallel.execution_mode, ExecutionMode::Parallel);
}

#[test]
fn mode_selection_degrades_for_small_input() {
    assert_eq!(auto_select(10, 64, 8), ExecutionMode::Sequential);
    assert_eq!(auto_select(100, 64, 1), ExecutionMode::Sequential);

    #[cfg(feature = "parallel")]
    assert_eq!(auto_select(100, 64, 8), ExecutionMode::Parallel);
}

#[test]
fn sequential_pipeline_summarizes() {
    let pipeline = SummaryPipeline::new(
        EngineConfig::sequential(),
        LanguageProfile::for_language("en").unwrap(),
    );

    let doc = "A cat sat. A cat ran. The cat slept on the mat.";
    let run = pipeline.run(doc, 0.3).unwrap();

    assert_eq!(run.sentences_total, 3);
    assert_eq!(run.sentences_kept, 1);
    assert_eq!(run.summary, "A cat sat.");
    assert_eq!(run.mode_used, ExecutionMode::Sequential);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_pipeline_matches_sequential() {
    let profile = LanguageProfile::for_language("en").unwrap();
    let doc = build_document(120);

    let sequential = SummaryPipeline::new(EngineConfig::sequential(), profile.clone());
    let expected = sequential.summarize(&doc, 0.4).unwrap();

    for workers in [2, 4, 8] {
        let parallel = SummaryPipeline::new(
            EngineConfig {
                execution_mode: ExecutionMode::Parallel,
                threads: Some(workers),
                min_parallel_sentences: 1,
            },
            profile.clone(),
        );
        let run = parallel.run(&doc, 0.4).unwrap();
        assert_eq!(run.mode_used, ExecutionMode::Parallel);
        assert_eq!(run.summary, expected, "diverged with {workers} workers");
    }
}

#[test]
fn full_factor_returns_the_document_in_order() {
    let pipeline = SummaryPipeline::new(
        EngineConfig::default(),
        LanguageProfile::for_language("en").unwrap(),
    );
    let doc = build_document(30);
    let run = pipeline.run(&doc, 1.0).unwrap();
    assert_eq!(run.summary, doc);
    assert_eq!(run.sentences_kept, 30);
}

#[test]
fn chunk_partition_covers_the_sentences() {
    let ranges = chunker::partition(17, 4);
    assert_eq!(ranges.len(), 4);
    assert_eq!(ranges.first().unwrap().start, 0);
    assert_eq!(ranges.last().unwrap().end, 17);
}

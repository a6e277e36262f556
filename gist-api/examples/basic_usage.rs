//! Basic usage example for the gist summarization API

use gist_api::{par_summarize, summarize, Config, Input, Mode, Summarizer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = "Rust compiles to native code. The compiler checks ownership at \
                compile time. Ownership errors never reach production. The toolchain \
                ships a formatter and a test runner. Most projects use cargo for \
                builds. Cargo resolves dependencies from the registry.";

    // Method 1: convenience functions
    println!("=== Method 1: Convenience Functions ===");
    let summary = summarize(text, 0.4)?;
    println!("Sequential summary: {summary}");

    let parallel = par_summarize(text, 0.4)?;
    assert_eq!(summary, parallel);
    println!("Parallel path agrees byte-for-byte\n");

    // Method 2: reusable summarizer with metadata
    println!("=== Method 2: Summarizer with Metadata ===");
    let summarizer = Summarizer::new()?;
    let output = summarizer.summarize(Input::from_text(text), 0.5)?;
    println!(
        "Kept {} of {} sentences in {}ms ({:?} mode)",
        output.metadata.sentences_kept,
        output.metadata.sentences_total,
        output.metadata.processing_time_ms,
        output.metadata.mode_used,
    );
    println!("{}\n", output.summary);

    // Method 3: custom configuration
    println!("=== Method 3: Custom Configuration ===");
    let summarizer = Summarizer::with_config(
        Config::builder()
            .language("en")
            .execution_mode(Mode::Parallel)
            .threads(Some(2))
            .min_parallel_sentences(4)
            .build()?,
    )?;
    let output = summarizer.summarize(Input::from_text(text), 0.3)?;
    println!("Custom config kept {} sentences", output.metadata.sentences_kept);

    Ok(())
}

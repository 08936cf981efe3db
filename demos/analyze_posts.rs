//! # Post Analysis Example
//!
//! Runs the full pipeline over a handful of in-memory posts and shows the
//! per-token valences behind a few scores.

use post_sentiment::{
    AnalysisSettings, ConsoleSink, LexiconScorer, MemorySource, Pipeline, RawRecord, Resources,
    VisualizationSink,
};

fn main() -> post_sentiment::Result<()> {
    println!("=== Post Sentiment Demo ===\n");

    let posts = vec![
        ("I love this, it's great!", Some("2024-01-01")),
        ("I hate this, terrible.", Some("2024-01-02")),
        ("", Some("2024-01-03")),
        ("It is a table.", None),
        ("The food was good but the service was AWFUL!!", Some("2024-01-04")),
        ("Not bad at all :)", Some("2024-01-05")),
        ("The train leaves at noon", Some("2024-01-06")),
    ];

    let raw: Vec<RawRecord> = posts
        .iter()
        .map(|(text, ts)| RawRecord::new(Some(*text), *ts))
        .collect();

    // Token-level breakdown
    let scorer = LexiconScorer::default();
    for (text, _) in posts.iter().filter(|(t, _)| !t.is_empty()) {
        println!("Text: \"{}\"", text);
        println!("{}", "-".repeat(60));
        for (token, valence) in scorer.valences(text) {
            if valence != 0.0 {
                println!("  {:<12} {:>6.3}", token, valence);
            }
        }
        println!("  compound     {:>6.3}\n", scorer.polarity(text));
    }

    // Full report
    let resources = Resources::builtin();
    let pipeline = Pipeline::new(AnalysisSettings::default(), &resources)?;
    let report = pipeline.run(&mut MemorySource::new(raw))?;

    println!("{}", "=".repeat(60));
    ConsoleSink::stdout().render(&report)?;

    Ok(())
}

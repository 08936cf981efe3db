//! # Post Sentiment
//!
//! Descriptive sentiment analytics for a batch of social-media posts:
//! cleaning, lexicon-based polarity scoring, word frequencies, per-class
//! intensity and objectivity bucketing.
//!
//! ## Modules
//!
//! - `data` - Record types, record sources and the cleaner
//! - `resources` - Sentiment lexicon and stopword sets
//! - `sentiment` - Compound polarity scoring
//! - `analysis` - Word frequencies, class aggregates, objectivity
//! - `pipeline` - The composed stages and their report
//! - `report` - Text and JSON renderings of a report
//! - `utils` - Configuration and logging
//!
//! ## Example Usage
//!
//! ```no_run
//! use post_sentiment::{
//!     AnalysisSettings, ConsoleSink, Pipeline, ResourceCache, ResourceSettings,
//!     SqliteSource, VisualizationSink,
//! };
//!
//! fn main() -> post_sentiment::Result<()> {
//!     // One-time resource setup
//!     let mut cache = ResourceCache::new(ResourceSettings::default());
//!     let resources = cache.prepare(&[])?;
//!
//!     // Run the analytics pass
//!     let pipeline = Pipeline::new(AnalysisSettings::default(), &resources)?;
//!     let report = pipeline.run(&mut SqliteSource::new("posts.db"))?;
//!
//!     ConsoleSink::stdout().render(&report)?;
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod resources;
pub mod sentiment;
pub mod utils;

// Re-exports for convenience
pub use analysis::{
    FrequencyTable, IntensityAggregator, LexicalAnalyzer, Objectivity, ObjectivityClassifier,
    ObjectivityRecord, WordCount,
};
pub use data::{
    Cleaner, CleaningStats, JsonFileSource, Language, MemorySource, RawRecord, Record,
    RecordSource, SqliteSource,
};
pub use error::{Error, Result};
pub use pipeline::{AnalysisReport, Pipeline};
pub use report::{ConsoleSink, JsonSink, VisualizationSink};
pub use resources::{ResourceCache, Resources, SentimentLexicon, StopwordSet};
pub use sentiment::{LexiconScorer, PolarityScorer, ScoredRecord, SentimentClass};
pub use utils::config::{AnalysisSettings, AppConfig, ResourceSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! # Analysis Module
//!
//! Terminal consumers of the scored table. Each is a pure function of its
//! input, so they can run in any order or concurrently.

mod aggregator;
pub mod lexical;
mod objectivity;

pub use aggregator::{ClassShare, IntensityAggregator, IntensitySummary, SpreadSummary};
pub use lexical::{FrequencyTable, LexicalAnalyzer, LexicalSummary, WordCount, DEFAULT_TOP_K};
pub use objectivity::{
    preview, Objectivity, ObjectivityClassifier, ObjectivityRecord, ObjectivitySummary,
    PreviewRow, DEFAULT_OBJECTIVITY_THRESHOLD,
};

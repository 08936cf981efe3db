//! # Sentiment Module
//!
//! Compound polarity scoring and the three-way sentiment class.

mod scorer;
mod vader;

pub use scorer::{score_records, PolarityScorer, ScoredRecord, SentimentClass};
pub use vader::LexiconScorer;

//! # Sentiment Scoring
//!
//! The scorer capability and the stage that turns cleaned records into
//! scored records.

use crate::data::Record;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Anything that maps a text to a compound polarity in [-1, 1]
///
/// Implementations must be total: every text yields a score, texts with
/// no sentiment-bearing words typically 0.0.
pub trait PolarityScorer: Send + Sync {
    /// Compound polarity of `text`
    fn score(&self, text: &str) -> f64;

    /// Scorer name for logs and reports
    fn name(&self) -> &str {
        "custom"
    }
}

/// Three-way sentiment class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SentimentClass {
    Positive,
    Negative,
    Neutral,
}

impl SentimentClass {
    /// All classes in report order
    pub const ALL: [SentimentClass; 3] = [
        SentimentClass::Positive,
        SentimentClass::Negative,
        SentimentClass::Neutral,
    ];

    /// Classify a compound score
    ///
    /// Exact zero boundary: anything above 0.0 is positive, anything
    /// below is negative, only 0.0 itself is neutral.
    pub fn from_compound(compound: f64) -> Self {
        if compound > 0.0 {
            SentimentClass::Positive
        } else if compound < 0.0 {
            SentimentClass::Negative
        } else {
            SentimentClass::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentClass::Positive => "Positive",
            SentimentClass::Negative => "Negative",
            SentimentClass::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cleaned record with its polarity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub record: Record,
    /// Compound polarity in [-1, 1]
    pub compound: f64,
    pub sentiment_class: SentimentClass,
}

impl ScoredRecord {
    /// Attach a compound score, deriving the class from it
    pub fn new(record: Record, compound: f64) -> Self {
        Self {
            record,
            compound,
            sentiment_class: SentimentClass::from_compound(compound),
        }
    }
}

/// Score every record
///
/// Finite scores outside [-1, 1] are clamped. A non-finite score aborts
/// the stage so callers never see a partially scored table.
pub fn score_records(scorer: &dyn PolarityScorer, records: Vec<Record>) -> Result<Vec<ScoredRecord>> {
    let mut scored = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let value = scorer.score(&record.text);
        if !value.is_finite() {
            return Err(Error::InvalidScore { index, value });
        }
        let compound = value.clamp(-1.0, 1.0);
        if compound != value {
            debug!(index, value, "clamped out-of-range compound");
        }
        scored.push(ScoredRecord::new(record, compound));
    }

    info!(scorer = scorer.name(), records = scored.len(), "scored records");
    Ok(scored)
}

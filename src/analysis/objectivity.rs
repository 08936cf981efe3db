//! # Objectivity Classification
//!
//! Buckets records by compound magnitude: scores within the threshold of
//! neutral are labelled objective, the rest subjective. This measures
//! polarity strength, not a separate subjectivity model.

use super::aggregator::group_means;
use crate::error::{Error, Result};
use crate::sentiment::{ScoredRecord, SentimentClass};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Default magnitude threshold
pub const DEFAULT_OBJECTIVITY_THRESHOLD: f64 = 0.5;

/// Objectivity label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Objectivity {
    Objective,
    Subjective,
}

impl Objectivity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Objectivity::Objective => "Objective",
            Objectivity::Subjective => "Subjective",
        }
    }
}

impl fmt::Display for Objectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scored record with its objectivity label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectivityRecord {
    #[serde(flatten)]
    pub scored: ScoredRecord,
    pub objectivity: Objectivity,
}

/// First rows of the labelled table, trimmed for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewRow {
    pub text: String,
    pub compound: f64,
    pub sentiment_class: SentimentClass,
    pub objectivity: Objectivity,
}

/// Counts and mean compound per label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectivitySummary {
    pub threshold: f64,
    pub counts: BTreeMap<Objectivity, usize>,
    pub means: BTreeMap<Objectivity, f64>,
}

/// Magnitude-threshold classifier
#[derive(Debug, Clone, Copy)]
pub struct ObjectivityClassifier {
    threshold: f64,
}

impl Default for ObjectivityClassifier {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_OBJECTIVITY_THRESHOLD,
        }
    }
}

impl ObjectivityClassifier {
    /// Classifier with an explicit threshold; must be finite and non-negative
    pub fn new(threshold: f64) -> Result<Self> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(Error::Config(format!(
                "objectivity threshold must be a non-negative number, got {}",
                threshold
            )));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Objective iff `-threshold <= compound <= threshold`
    pub fn classify(&self, compound: f64) -> Objectivity {
        if (-self.threshold..=self.threshold).contains(&compound) {
            Objectivity::Objective
        } else {
            Objectivity::Subjective
        }
    }

    /// Label every record, preserving order
    pub fn label(&self, records: &[ScoredRecord]) -> Vec<ObjectivityRecord> {
        records
            .iter()
            .map(|scored| ObjectivityRecord {
                objectivity: self.classify(scored.compound),
                scored: scored.clone(),
            })
            .collect()
    }

    /// Counts and means per present label
    pub fn summarize(&self, labelled: &[ObjectivityRecord]) -> ObjectivitySummary {
        let mut counts = BTreeMap::new();
        for record in labelled {
            *counts.entry(record.objectivity).or_insert(0) += 1;
        }

        ObjectivitySummary {
            threshold: self.threshold,
            counts,
            means: group_means(labelled.iter().map(|r| (r.objectivity, r.scored.compound))),
        }
    }

    /// Label and summarize in one pass over the scored table
    pub fn classify_all(&self, records: &[ScoredRecord]) -> (Vec<ObjectivityRecord>, ObjectivitySummary) {
        let labelled = self.label(records);
        let summary = self.summarize(&labelled);
        (labelled, summary)
    }
}

/// First `rows` labelled records as display rows
pub fn preview(labelled: &[ObjectivityRecord], rows: usize) -> Vec<PreviewRow> {
    labelled
        .iter()
        .take(rows)
        .map(|r| PreviewRow {
            text: r.scored.record.text.clone(),
            compound: r.scored.compound,
            sentiment_class: r.scored.sentiment_class,
            objectivity: r.objectivity,
        })
        .collect()
}

//! # Record Cleaning
//!
//! Turns raw source rows into an analysis-ready table.

use super::record::{Language, RawRecord, Record};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What the cleaner kept and why it dropped the rest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningStats {
    /// Records received from the source
    pub read: usize,
    /// Records that survived cleaning
    pub kept: usize,
    /// Dropped because the text was missing
    pub missing_text: usize,
    /// Dropped because the timestamp was missing (text present)
    pub missing_timestamp: usize,
    /// Dropped because the text was empty after trimming
    pub blank_text: usize,
}

impl CleaningStats {
    /// Total number of dropped records
    pub fn dropped(&self) -> usize {
        self.missing_text + self.missing_timestamp + self.blank_text
    }
}

/// Stable filter over raw records
#[derive(Debug, Clone, Default)]
pub struct Cleaner {
    /// Language assigned to records that do not declare one
    default_language: Language,
}

impl Cleaner {
    /// Create a cleaner assigning `default_language` to undeclared records
    pub fn new(default_language: Language) -> Self {
        Self { default_language }
    }

    /// Clean a batch of raw records
    ///
    /// Drops rows with missing text, missing timestamp, or text that is
    /// blank after trimming. Surviving rows keep their input order and
    /// their text unchanged.
    pub fn clean(&self, raw: Vec<RawRecord>) -> (Vec<Record>, CleaningStats) {
        let mut stats = CleaningStats {
            read: raw.len(),
            ..Default::default()
        };

        let records: Vec<Record> = raw
            .into_iter()
            .filter_map(|row| {
                let Some(text) = row.text else {
                    stats.missing_text += 1;
                    return None;
                };
                let Some(timestamp) = row.timestamp else {
                    stats.missing_timestamp += 1;
                    return None;
                };
                if text.trim().is_empty() {
                    stats.blank_text += 1;
                    return None;
                }
                Some(Record {
                    text,
                    timestamp,
                    language: row.language.unwrap_or(self.default_language),
                })
            })
            .collect();

        stats.kept = records.len();
        debug!(
            read = stats.read,
            kept = stats.kept,
            missing_text = stats.missing_text,
            missing_timestamp = stats.missing_timestamp,
            blank_text = stats.blank_text,
            "cleaned records"
        );

        (records, stats)
    }
}

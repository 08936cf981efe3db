//! # Post Records
//!
//! Raw records as delivered by a record source and the cleaned records
//! the analytics stages work on.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared language of a post, selects the stopword set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    /// All supported languages
    pub const ALL: [Language; 2] = [Language::English, Language::Spanish];

    /// Corpus name, also the stopword file name in an NLTK-style directory
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "spanish" | "es" | "español" | "espanol" => Ok(Language::Spanish),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

/// A post as read from storage; any field may be missing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Post body
    pub text: Option<String>,
    /// Publication time
    pub timestamp: Option<NaiveDateTime>,
    /// Language declared by the source, if any
    pub language: Option<Language>,
}

impl RawRecord {
    /// Build a raw record, parsing the timestamp leniently
    ///
    /// An unparseable timestamp is treated as missing.
    pub fn new(text: Option<&str>, timestamp: Option<&str>) -> Self {
        Self {
            text: text.map(str::to_string),
            timestamp: timestamp.and_then(parse_timestamp),
            language: None,
        }
    }

    /// Declare the post language
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }
}

/// A post that passed cleaning: non-blank text and a timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub text: String,
    pub timestamp: NaiveDateTime,
    pub language: Language,
}

/// Parse the timestamp formats storage layers commonly hand out
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS[.fff]`,
/// `YYYY-MM-DDTHH:MM:SS[.fff]` and RFC 3339 (converted to UTC).
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

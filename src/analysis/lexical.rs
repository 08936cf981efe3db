//! # Lexical Analysis
//!
//! Tokenization with stopword removal and global word frequencies.

use crate::data::Language;
use crate::error::{Error, Result};
use crate::resources::{Resources, StopwordSet};
use crate::sentiment::ScoredRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

/// Default number of top words reported
pub const DEFAULT_TOP_K: usize = 10;

/// A word and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Word frequencies in first-encounter order
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrequencyTable {
    entries: Vec<WordCount>,
    #[serde(skip)]
    index: HashMap<String, usize>,
    total: usize,
}

impl PartialEq for FrequencyTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries && self.total == other.total
    }
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `word`
    pub fn add(&mut self, word: &str) {
        self.total += 1;
        match self.index.get(word) {
            Some(&pos) => self.entries[pos].count += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push(WordCount {
                    word: word.to_string(),
                    count: 1,
                });
            }
        }
    }

    /// Occurrences of `word` (0 when absent)
    pub fn count(&self, word: &str) -> usize {
        self.index
            .get(word)
            .map(|&pos| self.entries[pos].count)
            .unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in first-encounter order
    pub fn entries(&self) -> &[WordCount] {
        &self.entries
    }

    /// All entries by descending count, ties in first-encounter order
    pub fn ranked(&self) -> Vec<WordCount> {
        let mut ranked = self.entries.clone();
        // sort_by is stable, so equal counts keep encounter order
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// The `k` most frequent words; fewer if fewer distinct words exist
    pub fn top_k(&self, k: usize) -> Vec<WordCount> {
        let mut ranked = self.ranked();
        ranked.truncate(k);
        ranked
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for word in iter {
            table.add(word.as_ref());
        }
        table
    }
}

/// Output of the lexical stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexicalSummary {
    /// Most frequent words
    pub top_words: Vec<WordCount>,
    /// Full frequency table for inspection
    pub frequencies: FrequencyTable,
}

/// Tokenizer and frequency counter
#[derive(Debug, Clone)]
pub struct LexicalAnalyzer {
    stopwords: HashMap<Language, Arc<StopwordSet>>,
}

impl LexicalAnalyzer {
    pub fn new(stopwords: HashMap<Language, Arc<StopwordSet>>) -> Self {
        Self { stopwords }
    }

    pub fn from_resources(resources: &Resources) -> Self {
        Self::new(resources.stopwords.clone())
    }

    fn stopwords_for(&self, language: Language) -> Result<&StopwordSet> {
        self.stopwords
            .get(&language)
            .map(Arc::as_ref)
            .ok_or_else(|| Error::resource(format!("stopwords/{}", language), "not loaded"))
    }

    /// Lowercase, strip punctuation, split on whitespace, drop stopwords
    pub fn tokenize(&self, text: &str, language: Language) -> Result<Vec<String>> {
        let stopwords = self.stopwords_for(language)?;
        let normalized: String = text.nfc().collect::<String>().to_lowercase();
        let stripped = strip_punctuation(&normalized);

        Ok(stripped
            .split_whitespace()
            .filter(|word| !stopwords.contains(word))
            .map(str::to_string)
            .collect())
    }

    /// Global frequency table over every record's tokens
    pub fn frequencies(&self, records: &[ScoredRecord]) -> Result<FrequencyTable> {
        let mut table = FrequencyTable::new();
        for scored in records {
            for token in self.tokenize(&scored.record.text, scored.record.language)? {
                table.add(&token);
            }
        }
        debug!(distinct = table.len(), total = table.total(), "counted tokens");
        Ok(table)
    }

    /// Frequency table plus its top `k` words
    pub fn analyze(&self, records: &[ScoredRecord], k: usize) -> Result<LexicalSummary> {
        let frequencies = self.frequencies(records)?;
        Ok(LexicalSummary {
            top_words: frequencies.top_k(k),
            frequencies,
        })
    }
}

/// ASCII punctuation plus the General Punctuation block (U+2010..U+205E),
/// Latin-1 and CJK marks. Other Unicode punctuation is kept as word text.
fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || ('\u{2010}'..='\u{205E}').contains(&c)
        || ('\u{3001}'..='\u{3003}').contains(&c)
        || ('\u{3008}'..='\u{3011}').contains(&c)
        || matches!(c, '¡' | '¿' | '«' | '»' | '·' | '¨' | '§' | '¶' | '´')
}

/// Remove the characters matched by [`is_punctuation`] without inserting spaces
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|&c| !is_punctuation(c)).collect()
}

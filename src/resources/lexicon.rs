//! # Sentiment Lexicon
//!
//! Word → valence mapping in the VADER file format.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;

const BUILTIN_LEXICON: &str = include_str!("builtin/vader_lexicon.txt");

/// Sentiment lexicon
///
/// Valences are on VADER's roughly [-4, 4] scale. Lookups are
/// case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct SentimentLexicon {
    valences: HashMap<String, f64>,
}

impl SentimentLexicon {
    /// The lexicon embedded in the crate
    ///
    /// A compact subset of common sentiment words. For production runs point
    /// `resources.lexicon_path` at the full `vader_lexicon.txt`; its
    /// tab-separated format loads unchanged through [`SentimentLexicon::from_file`].
    pub fn builtin() -> Self {
        // The embedded file is covered by tests; parsing cannot fail here.
        Self::parse(BUILTIN_LEXICON, "builtin lexicon").unwrap_or_default()
    }

    /// Load a lexicon file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::resource(path.display().to_string(), e.to_string()))?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse `token<TAB>mean[<TAB>...]` lines
    ///
    /// Blank lines and lines starting with `#` are skipped. Extra columns
    /// (standard deviation, raw ratings) are ignored.
    pub fn parse(content: &str, name: &str) -> Result<Self> {
        let mut valences = HashMap::new();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim_end();
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let mut columns = line.split('\t');
            let token = columns.next().unwrap_or_default().trim();
            let valence = columns
                .next()
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    Error::resource(name, format!("line {}: expected token<TAB>valence", line_no + 1))
                })?;

            if token.is_empty() {
                return Err(Error::resource(name, format!("line {}: empty token", line_no + 1)));
            }
            valences.insert(token.to_lowercase(), valence);
        }

        if valences.is_empty() {
            return Err(Error::resource(name, "lexicon has no entries"));
        }

        Ok(Self { valences })
    }

    /// Valence of a word, if it is in the lexicon
    pub fn get(&self, word: &str) -> Option<f64> {
        self.valences
            .get(word)
            .or_else(|| self.valences.get(&word.to_lowercase()))
            .copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Add or replace an entry
    pub fn insert(&mut self, word: &str, valence: f64) {
        self.valences.insert(word.to_lowercase(), valence);
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

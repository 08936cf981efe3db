//! Stopword sets, one per language, in the NLTK corpus layout.

use crate::data::Language;
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

const BUILTIN_ENGLISH: &str = include_str!("builtin/english");
const BUILTIN_SPANISH: &str = include_str!("builtin/spanish");

/// Stopwords of a single language
#[derive(Debug, Clone)]
pub struct StopwordSet {
    language: Language,
    words: HashSet<String>,
}

impl StopwordSet {
    /// Embedded stopword list
    pub fn builtin(language: Language) -> Self {
        let content = match language {
            Language::English => BUILTIN_ENGLISH,
            Language::Spanish => BUILTIN_SPANISH,
        };
        Self::parse(language, content)
    }

    /// Read `<dir>/<language>` with one word per line
    pub fn from_dir(dir: impl AsRef<Path>, language: Language) -> Result<Self> {
        let path = dir.as_ref().join(language.name());
        let content = std::fs::read_to_string(&path)
            .map_err(|e| Error::resource(path.display().to_string(), e.to_string()))?;
        let set = Self::parse(language, &content);
        if set.is_empty() {
            return Err(Error::resource(path.display().to_string(), "stopword list is empty"));
        }
        Ok(set)
    }

    /// Parse a newline separated list; words are lowercased and NFC normalized
    pub fn parse(language: Language, content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty() && !w.starts_with('#'))
            .map(|w| w.nfc().collect::<String>().to_lowercase())
            .collect();
        Self { language, words }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Whether `word` (already lowercased) is a stopword
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_english() {
        let set = StopwordSet::builtin(Language::English);
        assert_eq!(set.language(), Language::English);
        assert!(set.contains("the"));
        assert!(set.contains("its"));
        assert!(!set.contains("love"));
    }

    #[test]
    fn test_builtin_spanish() {
        let set = StopwordSet::builtin(Language::Spanish);
        assert!(set.contains("de"));
        assert!(set.contains("más"));
        assert!(!set.contains("amor"));
    }

    #[test]
    fn test_from_dir() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("english"), "foo\nBar\n\n").unwrap();

        let set = StopwordSet::from_dir(dir.path(), Language::English).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("bar"));
    }

    #[test]
    fn test_from_dir_missing_language() {
        let dir = tempdir().unwrap();
        let err = StopwordSet::from_dir(dir.path(), Language::Spanish).unwrap_err();
        assert!(matches!(err, Error::ResourceUnavailable { .. }));
    }
}

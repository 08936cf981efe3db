//! # Resource Cache
//!
//! Explicit setup step for the language resources. Each resource is
//! loaded at most once per cache; later requests reuse the loaded copy.

use super::lexicon::SentimentLexicon;
use super::stopwords::StopwordSet;
use crate::data::Language;
use crate::error::Result;
use crate::utils::config::ResourceSettings;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Loaded resources handed to the pipeline
#[derive(Debug, Clone)]
pub struct Resources {
    pub lexicon: Arc<SentimentLexicon>,
    pub stopwords: HashMap<Language, Arc<StopwordSet>>,
}

impl Resources {
    /// Embedded lexicon and stopword lists for every supported language
    pub fn builtin() -> Self {
        Self {
            lexicon: Arc::new(SentimentLexicon::builtin()),
            stopwords: Language::ALL
                .iter()
                .map(|&lang| (lang, Arc::new(StopwordSet::builtin(lang))))
                .collect(),
        }
    }

    /// Languages with a loaded stopword set, sorted
    pub fn languages(&self) -> Vec<Language> {
        let mut languages: Vec<Language> = self.stopwords.keys().copied().collect();
        languages.sort();
        languages
    }
}

/// Check-before-load cache of language resources
#[derive(Debug)]
pub struct ResourceCache {
    settings: ResourceSettings,
    lexicon: Option<Arc<SentimentLexicon>>,
    stopwords: HashMap<Language, Arc<StopwordSet>>,
    loads: usize,
}

impl ResourceCache {
    pub fn new(settings: ResourceSettings) -> Self {
        Self {
            settings,
            lexicon: None,
            stopwords: HashMap::new(),
            loads: 0,
        }
    }

    /// Sentiment lexicon, loaded on first request
    pub fn lexicon(&mut self) -> Result<Arc<SentimentLexicon>> {
        if let Some(lexicon) = &self.lexicon {
            debug!("lexicon already loaded");
            return Ok(Arc::clone(lexicon));
        }

        let lexicon = match &self.settings.lexicon_path {
            Some(path) => {
                info!(path = %path.display(), "loading sentiment lexicon");
                SentimentLexicon::from_file(path)?
            }
            None => SentimentLexicon::builtin(),
        };
        info!(entries = lexicon.len(), "sentiment lexicon ready");

        let lexicon = Arc::new(lexicon);
        self.lexicon = Some(Arc::clone(&lexicon));
        self.loads += 1;
        Ok(lexicon)
    }

    /// Stopword set for `language`, loaded on first request
    pub fn stopwords(&mut self, language: Language) -> Result<Arc<StopwordSet>> {
        if let Some(set) = self.stopwords.get(&language) {
            debug!(%language, "stopwords already loaded");
            return Ok(Arc::clone(set));
        }

        let set = match &self.settings.stopwords_dir {
            Some(dir) => {
                info!(%language, dir = %dir.display(), "loading stopwords");
                StopwordSet::from_dir(dir, language)?
            }
            None => StopwordSet::builtin(language),
        };
        info!(%language, words = set.len(), "stopwords ready");

        let set = Arc::new(set);
        self.stopwords.insert(language, Arc::clone(&set));
        self.loads += 1;
        Ok(set)
    }

    /// Load the lexicon plus the configured languages and `extra` ones
    ///
    /// Any missing resource aborts setup with `ResourceUnavailable`.
    pub fn prepare(&mut self, extra: &[Language]) -> Result<Resources> {
        let lexicon = self.lexicon()?;

        let mut languages = self.settings.languages.clone();
        languages.extend_from_slice(extra);
        languages.sort();
        languages.dedup();

        let mut stopwords = HashMap::new();
        for language in languages {
            stopwords.insert(language, self.stopwords(language)?);
        }

        Ok(Resources { lexicon, stopwords })
    }

    /// Number of resources actually loaded (cache misses)
    pub fn load_count(&self) -> usize {
        self.loads
    }
}

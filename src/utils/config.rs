//! Configuration utilities

use crate::analysis::{DEFAULT_OBJECTIVITY_THRESHOLD, DEFAULT_TOP_K};
use crate::data::source::DEFAULT_QUERY;
use crate::data::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where records come from
    pub source: SourceSettings,
    /// Pipeline parameters
    pub analysis: AnalysisSettings,
    /// Language resources
    pub resources: ResourceSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Check values the type system cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.analysis.objectivity_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "analysis.objectivity_threshold must be non-negative, got {}",
                threshold
            )));
        }
        if self.source.database_path.is_some() && self.source.records_path.is_some() {
            return Err(ConfigError::Invalid(
                "set only one of source.database_path and source.records_path".to_string(),
            ));
        }
        if self.source.query.trim().is_empty() {
            return Err(ConfigError::Invalid("source.query is empty".to_string()));
        }
        Ok(())
    }
}

/// Record source settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// SQLite database file
    pub database_path: Option<PathBuf>,
    /// Query returning (text, timestamp[, language]) rows
    pub query: String,
    /// JSON records file, alternative to the database
    pub records_path: Option<PathBuf>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            database_path: None,
            query: DEFAULT_QUERY.to_string(),
            records_path: None,
        }
    }
}

/// Pipeline parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Number of top words to report
    pub top_k: usize,
    /// Compound magnitude up to which a post counts as objective
    pub objectivity_threshold: f64,
    /// Language for records that do not declare one
    pub default_language: Language,
    /// Labelled rows shown in the preview table
    pub preview_rows: usize,
    /// Run the terminal stages concurrently
    pub parallel: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            objectivity_threshold: DEFAULT_OBJECTIVITY_THRESHOLD,
            default_language: Language::English,
            preview_rows: 10,
            parallel: false,
        }
    }
}

/// Language resource locations; `None` selects the embedded copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceSettings {
    /// VADER-format lexicon file
    pub lexicon_path: Option<PathBuf>,
    /// Directory holding one stopword file per language
    pub stopwords_dir: Option<PathBuf>,
    /// Languages to load stopwords for
    pub languages: Vec<Language>,
}

impl Default for ResourceSettings {
    fn default() -> Self {
        Self {
            lexicon_path: None,
            stopwords_dir: None,
            languages: Language::ALL.to_vec(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Load configuration from file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ConfigError::FileError(e.to_string()))?;

    let ext = path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    let config: AppConfig = match ext {
        "json" => serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        "toml" => toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        _ => return Err(ConfigError::UnsupportedFormat(ext.to_string())),
    };

    config.validate()?;
    Ok(config)
}

/// Save configuration to file
pub fn save_config<P: AsRef<Path>>(config: &AppConfig, path: P) -> Result<(), ConfigError> {
    let ext = path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    let content = match ext {
        "json" => serde_json::to_string_pretty(config)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?,
        "toml" => toml::to_string_pretty(config)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?,
        _ => return Err(ConfigError::UnsupportedFormat(ext.to_string())),
    };

    std::fs::write(path, content)
        .map_err(|e| ConfigError::FileError(e.to_string()))
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("File error: {0}")]
    FileError(String),
    /// Parse error
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Serialization error
    #[error("Serialize error: {0}")]
    SerializeError(String),
    /// Unsupported format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
    /// Value out of range or inconsistent
    #[error("Invalid value: {0}")]
    Invalid(String),
}

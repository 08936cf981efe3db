//! Error types for the post sentiment analytics library

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
///
/// Malformed records and empty input are not errors: the cleaner drops
/// the former and every stage degrades to empty outputs for the latter.
#[derive(Error, Debug)]
pub enum Error {
    /// A language resource (lexicon, stopword set) could not be loaded
    #[error("Resource unavailable: {resource}: {reason}")]
    ResourceUnavailable { resource: String, reason: String },

    /// A scorer produced a value that is not a finite number
    #[error("Scorer returned non-finite compound {value} for record {index}")]
    InvalidScore { index: usize, value: f64 },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Storage collaborator failure
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a missing or unreadable resource
    pub fn resource(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::ResourceUnavailable {
            resource: resource.into(),
            reason: reason.into(),
        }
    }

    /// Whether the failure came from outside the analytics core
    pub fn is_upstream(&self) -> bool {
        matches!(self, Error::Storage(_) | Error::Io(_) | Error::Json(_))
    }
}

impl From<crate::utils::config::ConfigError> for Error {
    fn from(err: crate::utils::config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

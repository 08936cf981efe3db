//! # Language Resources
//!
//! Sentiment lexicon and stopword sets, loaded once by an explicit setup
//! call before the pipeline is built.

mod cache;
mod lexicon;
mod stopwords;

pub use cache::{ResourceCache, Resources};
pub use lexicon::SentimentLexicon;
pub use stopwords::StopwordSet;

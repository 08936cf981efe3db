//! # Data Module
//!
//! Record types, the storage boundary and the cleaning stage.

mod cleaner;
mod record;
pub mod source;

pub use cleaner::{Cleaner, CleaningStats};
pub use record::{parse_timestamp, Language, RawRecord, Record};
pub use source::{JsonFileSource, MemorySource, RecordSource, SqliteSource};

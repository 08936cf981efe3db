//! # Record Sources
//!
//! The storage boundary: anything that can hand over a batch of
//! `{text, timestamp}` rows.

use super::record::{parse_timestamp, Language, RawRecord};
use crate::error::Result;
use chrono::DateTime;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default query for the SQLite source
pub const DEFAULT_QUERY: &str = "SELECT text, posted_at FROM posts";

/// Supplier of raw records
///
/// Failures are propagated to the caller unchanged; retry policy belongs
/// to the implementation, not to the pipeline.
pub trait RecordSource {
    /// Fetch the whole batch
    fn fetch(&mut self) -> Result<Vec<RawRecord>>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

/// Records held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<RawRecord>,
}

impl MemorySource {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }
}

impl RecordSource for MemorySource {
    fn fetch(&mut self) -> Result<Vec<RawRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} records)", self.records.len())
    }
}

/// One row of a JSON records file
#[derive(Debug, Deserialize)]
struct JsonRow {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(default)]
    language: Option<Language>,
}

/// JSON array of `{text, timestamp, language}` objects on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSource for JsonFileSource {
    fn fetch(&mut self) -> Result<Vec<RawRecord>> {
        let content = std::fs::read_to_string(&self.path)?;
        let rows: Vec<JsonRow> = serde_json::from_str(&content)?;

        let records = rows
            .into_iter()
            .map(|row| RawRecord {
                text: row.text,
                timestamp: row.timestamp.as_deref().and_then(parse_timestamp),
                language: row.language,
            })
            .collect::<Vec<_>>();

        info!(path = %self.path.display(), rows = records.len(), "loaded records file");
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}

/// Read-only SQLite source
///
/// The query's first column is the post text and the second the
/// timestamp, both nullable. An optional third column declares the
/// language. The connection lives only for the duration of `fetch`.
#[derive(Debug, Clone)]
pub struct SqliteSource {
    path: PathBuf,
    query: String,
}

impl SqliteSource {
    /// Source over `path` using [`DEFAULT_QUERY`]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            query: DEFAULT_QUERY.to_string(),
        }
    }

    /// Replace the select query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    fn open(&self) -> Result<Connection> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        Ok(Connection::open_with_flags(&self.path, flags)?)
    }
}

impl RecordSource for SqliteSource {
    fn fetch(&mut self) -> Result<Vec<RawRecord>> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(&self.query)?;
        let has_language = stmt.column_count() > 2;

        let rows = stmt.query_map([], |row| {
            let text: Option<String> = row.get(0)?;
            let timestamp = timestamp_from_value(row.get_ref(1)?);
            let language = if has_language {
                row.get::<_, Option<String>>(2)?
            } else {
                None
            };
            Ok((text, timestamp, language))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (text, timestamp, language) = row?;
            let language = language.and_then(|l| match l.parse::<Language>() {
                Ok(lang) => Some(lang),
                Err(e) => {
                    warn!("ignoring declared language: {}", e);
                    None
                }
            });
            records.push(RawRecord {
                text,
                timestamp,
                language,
            });
        }

        debug!(query = %self.query, "sqlite query finished");
        info!(path = %self.path.display(), rows = records.len(), "fetched records");
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("sqlite {}", self.path.display())
    }
}

/// Interpret a timestamp cell of any storage class
fn timestamp_from_value(value: ValueRef<'_>) -> Option<chrono::NaiveDateTime> {
    match value {
        ValueRef::Null => None,
        ValueRef::Text(bytes) => {
            let text = String::from_utf8_lossy(bytes);
            let parsed = parse_timestamp(&text);
            if parsed.is_none() {
                warn!(value = %text, "unparseable timestamp treated as missing");
            }
            parsed
        }
        ValueRef::Integer(secs) => DateTime::from_timestamp(secs, 0).map(|dt| dt.naive_utc()),
        ValueRef::Real(secs) => {
            DateTime::from_timestamp(secs.trunc() as i64, 0).map(|dt| dt.naive_utc())
        }
        ValueRef::Blob(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::params;
    use tempfile::tempdir;

    fn seed(path: &Path) {
        let conn = Connection::open(path).unwrap();
        conn.execute(
            "CREATE TABLE posts (id INTEGER PRIMARY KEY, text TEXT, posted_at TEXT, lang TEXT)",
            [],
        )
        .unwrap();
        let rows: [(Option<&str>, Option<&str>, Option<&str>); 4] = [
            (Some("I love this"), Some("2024-01-01 10:00:00"), None),
            (None, Some("2024-01-02"), None),
            (Some("sin fecha"), None, Some("spanish")),
            (Some("bad date"), Some("soon"), Some("english")),
        ];
        for (text, ts, lang) in rows {
            conn.execute(
                "INSERT INTO posts (text, posted_at, lang) VALUES (?1, ?2, ?3)",
                params![text, ts, lang],
            )
            .unwrap();
        }
    }

    #[test]
    fn test_sqlite_nullable_columns() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("posts.db");
        seed(&db);

        let mut source = SqliteSource::new(&db);
        let records = source.fetch().unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(records[0].text.as_deref(), Some("I love this"));
        assert!(records[0].timestamp.is_some());
        assert!(records[1].text.is_none());
        assert!(records[2].timestamp.is_none());
        assert!(records[3].timestamp.is_none());
        assert!(records.iter().all(|r| r.language.is_none()));
    }

    #[test]
    fn test_sqlite_language_column() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("posts.db");
        seed(&db);

        let mut source =
            SqliteSource::new(&db).with_query("SELECT text, posted_at, lang FROM posts ORDER BY id");
        let records = source.fetch().unwrap();

        assert_eq!(records[2].language, Some(Language::Spanish));
        assert_eq!(records[3].language, Some(Language::English));
    }

    #[test]
    fn test_sqlite_missing_database_is_storage_error() {
        let dir = tempdir().unwrap();
        let mut source = SqliteSource::new(dir.path().join("absent.db"));
        let err = source.fetch().unwrap_err();
        assert!(matches!(err, crate::Error::Storage(_)));
    }

    #[test]
    fn test_integer_timestamp() {
        let ts = timestamp_from_value(ValueRef::Integer(1_704_067_200)).unwrap();
        assert_eq!(ts.to_string(), "2024-01-01 00:00:00");
    }

    #[test]
    fn test_json_file_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");
        std::fs::write(
            &path,
            r#"[
                {"text": "great day", "timestamp": "2024-01-01"},
                {"text": null, "timestamp": "2024-01-02"},
                {"text": "hola", "timestamp": "2024-01-03", "language": "spanish"},
                {"text": "no date"}
            ]"#,
        )
        .unwrap();

        let records = JsonFileSource::new(&path).fetch().unwrap();
        assert_eq!(records.len(), 4);
        assert!(records[1].text.is_none());
        assert_eq!(records[2].language, Some(Language::Spanish));
        assert!(records[3].timestamp.is_none());
    }

    #[test]
    fn test_memory_source_is_repeatable() {
        let mut source = MemorySource::new(vec![RawRecord::new(Some("a b"), Some("2024-01-01"))]);
        assert_eq!(source.fetch().unwrap(), source.fetch().unwrap());
    }
}

//! Domain types for the page index.
//!
//! All path fields use `PathBuf`; page filenames are [`PageName`] keys.
//! [`Index`] keeps records in document order and as loaded, so an unchanged
//! index re-serializes byte-for-byte.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Filename of a page inside the pages directory, used as the index key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PageName(pub String);

impl PageName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for PageName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PageName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Index record
// ---------------------------------------------------------------------------

/// Metadata recorded for one page.
///
/// Fields other than `name`, `tags` and `date` are kept verbatim in `extra`
/// and written back on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEntry {
    /// Human-entered title.
    pub name: String,
    /// Tags in the order the operator typed them.
    pub tags: Vec<String>,
    /// Unix timestamp (seconds) of entry creation.
    pub date: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PageEntry {
    pub fn new(name: impl Into<String>, tags: Vec<String>, date: i64) -> Self {
        Self {
            name: name.into(),
            tags,
            date,
            extra: Map::new(),
        }
    }

    /// `date` as a UTC datetime, or `None` if out of chrono's range.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date, 0)
    }
}

// ---------------------------------------------------------------------------
// Index
// ---------------------------------------------------------------------------

/// The page index: page filename → raw JSON record, in document order.
///
/// Existing records are kept as loaded and written back untouched; only
/// [`Index::get`] tries to read one as a [`PageEntry`]. Duplicate keys in a
/// loaded document keep the first position and the last value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Index {
    records: Map<String, Value>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.records.contains_key(page)
    }

    /// The record for `page` as a [`PageEntry`], or `None` if absent or of
    /// another shape.
    pub fn get(&self, page: &str) -> Option<PageEntry> {
        self.records
            .get(page)
            .and_then(|record| PageEntry::deserialize(record).ok())
    }

    /// The record for `page` exactly as stored.
    pub fn raw(&self, page: &str) -> Option<&Value> {
        self.records.get(page)
    }

    /// Insert or replace the record for `page`.
    ///
    /// A replaced record keeps its original position; new pages are appended.
    /// Returns the previous record, if any.
    pub fn insert(&mut self, page: PageName, entry: PageEntry) -> Option<Value> {
        self.records.insert(page.0, Value::from(entry))
    }

    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

impl From<PageEntry> for Value {
    fn from(entry: PageEntry) -> Self {
        let mut record = Map::new();
        record.insert("name".to_string(), Value::String(entry.name));
        record.insert(
            "tags".to_string(),
            Value::Array(entry.tags.into_iter().map(Value::String).collect()),
        );
        record.insert("date".to_string(), Value::from(entry.date));
        record.extend(entry.extra);
        Value::Object(record)
    }
}

// ---------------------------------------------------------------------------
// Site layout
// ---------------------------------------------------------------------------

/// Where the pages directory and the index file live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    /// Site root; also the working directory for the VCS refresh.
    pub root: PathBuf,
    pub pages_dir: PathBuf,
    pub index_file: PathBuf,
}

impl SiteLayout {
    pub const DEFAULT_PAGES_DIR: &'static str = "pages";
    pub const DEFAULT_INDEX_FILE: &'static str = "index.json";

    /// `<root>/pages` and `<root>/index.json`.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            pages_dir: root.join(Self::DEFAULT_PAGES_DIR),
            index_file: root.join(Self::DEFAULT_INDEX_FILE),
            root,
        }
    }

    /// Override the pages directory; relative paths resolve against the root.
    pub fn with_pages_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.pages_dir = self.root.join(dir);
        self
    }

    /// Override the index file; relative paths resolve against the root.
    pub fn with_index_file(mut self, file: impl AsRef<Path>) -> Self {
        self.index_file = self.root.join(file);
        self
    }
}

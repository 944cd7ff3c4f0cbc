//! History record types

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Free-form record payload (e.g. a full report)
pub type Content = serde_json::Map<String, Value>;

/// ISO-8601 UTC with microseconds and no offset suffix
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Current UTC wall-clock time in [`TIMESTAMP_FORMAT`]
pub fn now_timestamp() -> String {
    Utc::now().naive_utc().format(TIMESTAMP_FORMAT).to_string()
}

/// A research topic entry
///
/// Field order here is the field order on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistoryRecord {
    pub id: String,
    pub timestamp: String,
    pub topic: String,
    pub summary: String,
    pub content: Content,
}

impl HistoryRecord {
    /// Build a record with a fresh v4 id stamped with the current time
    pub fn new(topic: impl Into<String>, summary: impl Into<String>, content: Content) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: now_timestamp(),
            topic: topic.into(),
            summary: summary.into(),
            content,
        }
    }

    /// Parsed timestamp; `None` if the stored string is not ISO-8601
    pub fn recorded_at(&self) -> Option<NaiveDateTime> {
        self.timestamp.parse().ok()
    }
}

/// One element of the history array
///
/// Elements that are not exactly a [`HistoryRecord`] are kept verbatim as
/// `Other` so a later save writes them back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HistoryEntry {
    Record(HistoryRecord),
    Other(Value),
}

impl HistoryEntry {
    /// The entry's string `id` field, if it has one
    pub fn id(&self) -> Option<&str> {
        match self {
            HistoryEntry::Record(record) => Some(&record.id),
            HistoryEntry::Other(value) => value.get("id").and_then(Value::as_str),
        }
    }

    pub fn as_record(&self) -> Option<&HistoryRecord> {
        match self {
            HistoryEntry::Record(record) => Some(record),
            HistoryEntry::Other(_) => None,
        }
    }

    pub fn into_record(self) -> Option<HistoryRecord> {
        match self {
            HistoryEntry::Record(record) => Some(record),
            HistoryEntry::Other(_) => None,
        }
    }
}

impl From<Value> for HistoryEntry {
    fn from(value: Value) -> Self {
        match HistoryRecord::deserialize(&value) {
            Ok(record) => HistoryEntry::Record(record),
            Err(_) => HistoryEntry::Other(value),
        }
    }
}

impl From<HistoryRecord> for HistoryEntry {
    fn from(record: HistoryRecord) -> Self {
        HistoryEntry::Record(record)
    }
}

/// Why an existing backing file was read as an empty history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Corruption {
    /// Not parseable as JSON (includes invalid UTF-8)
    InvalidJson { message: String },
    /// Valid JSON whose top-level value is not an array
    NotAnArray { found: &'static str },
}

impl Corruption {
    pub(crate) fn not_an_array(value: &Value) -> Self {
        let found = match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        Corruption::NotAnArray { found }
    }
}

impl fmt::Display for Corruption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Corruption::InvalidJson { message } => write!(f, "invalid JSON: {}", message),
            Corruption::NotAnArray { found } => {
                write!(f, "expected a JSON array, found {}", found)
            }
        }
    }
}

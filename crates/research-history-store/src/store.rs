//! Research history backed by a single JSON array file
//!
//! Every call is a full load, modify and rewrite cycle; nothing is cached
//! between calls. Concurrent writers race and the last save wins.

use crate::config::{StoreConfig, DEFAULT_HISTORY_FILE};
use crate::error::{Result, StoreError};
use crate::io::{overwrite, read_if_exists};
use crate::types::{Content, Corruption, HistoryEntry, HistoryRecord};
use serde_json::Value;
use std::path::{Path, PathBuf};

// Python's json module writes these for non-finite floats
const NON_FINITE_TOKENS: [&str; 3] = ["-Infinity", "Infinity", "NaN"];

/// Result of a load, with the reason the file was ignored if it was corrupt
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Loaded {
    pub entries: Vec<HistoryEntry>,
    pub corruption: Option<Corruption>,
    /// `NaN`/`Infinity`/`-Infinity` literals read as `null`
    pub non_finite: usize,
}

/// Ordered, append-only history of research topics
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full history
    ///
    /// A missing file, invalid JSON or a non-array document all load as an
    /// empty history. Other read failures are returned.
    pub fn load(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.load_checked()?.entries)
    }

    /// Like [`load`](Self::load), also reporting why a file was masked
    pub fn load_checked(&self) -> Result<Loaded> {
        let Some(bytes) = read_if_exists(&self.path).map_err(|e| self.io_error(e))? else {
            tracing::debug!(path = %self.path.display(), "no history file");
            return Ok(Loaded::default());
        };

        let loaded = parse_history(&bytes);
        match &loaded.corruption {
            Some(corruption) => tracing::warn!(
                path = %self.path.display(),
                %corruption,
                "treating corrupt history file as empty"
            ),
            None => tracing::debug!(
                path = %self.path.display(),
                entries = loaded.entries.len(),
                "loaded history"
            ),
        }
        if loaded.non_finite > 0 {
            tracing::warn!(
                path = %self.path.display(),
                count = loaded.non_finite,
                "non-finite numbers in history file read as null"
            );
        }
        Ok(loaded)
    }

    /// Overwrite the backing file with `entries`, pretty-printed
    ///
    /// Not atomic; see [`overwrite`](crate::overwrite).
    pub fn save(&self, entries: &[HistoryEntry]) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        overwrite(&self.path, json.as_bytes()).map_err(|e| self.io_error(e))?;
        tracing::debug!(
            path = %self.path.display(),
            entries = entries.len(),
            "saved history"
        );
        Ok(())
    }

    /// Append a new topic and return its id
    ///
    /// `None` content is stored as an empty object.
    pub fn add(&self, topic: &str, summary: &str, content: Option<Content>) -> Result<String> {
        let mut entries = self.load()?;
        let record = HistoryRecord::new(topic, summary, content.unwrap_or_default());
        let id = record.id.clone();
        entries.push(record.into());
        self.save(&entries)?;
        Ok(id)
    }

    /// First entry whose `id` equals `id`, in file order
    pub fn get(&self, id: &str) -> Result<Option<HistoryEntry>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|entry| entry.id() == Some(id)))
    }

    /// Every entry, oldest first
    pub fn get_all(&self) -> Result<Vec<HistoryEntry>> {
        self.load()
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_FILE)
    }
}

fn parse_history(bytes: &[u8]) -> Loaded {
    let (value, non_finite) = match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => (value, 0),
        Err(e) => {
            let (patched, replaced) = replace_non_finite(bytes);
            match serde_json::from_slice::<Value>(&patched) {
                Ok(value) if replaced > 0 => (value, replaced),
                _ => {
                    return Loaded {
                        corruption: Some(Corruption::InvalidJson {
                            message: e.to_string(),
                        }),
                        ..Default::default()
                    }
                }
            }
        }
    };

    match value {
        Value::Array(items) => Loaded {
            entries: items.into_iter().map(HistoryEntry::from).collect(),
            corruption: None,
            non_finite,
        },
        other => Loaded {
            corruption: Some(Corruption::not_an_array(&other)),
            ..Default::default()
        },
    }
}

/// Rewrite non-finite literals outside strings as `null`
fn replace_non_finite(bytes: &[u8]) -> (Vec<u8>, usize) {
    let mut out = Vec::with_capacity(bytes.len());
    let mut replaced = 0;
    let mut in_string = false;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if in_string {
            out.push(b);
            match b {
                b'\\' => {
                    if let Some(&escaped) = bytes.get(i + 1) {
                        out.push(escaped);
                        i += 1;
                    }
                }
                b'"' => in_string = false,
                _ => {}
            }
            i += 1;
            continue;
        }

        if b == b'"' {
            in_string = true;
            out.push(b);
            i += 1;
            continue;
        }

        let rest = &bytes[i..];
        match NON_FINITE_TOKENS
            .iter()
            .find(|token| rest.starts_with(token.as_bytes()))
        {
            Some(token) => {
                out.extend_from_slice(b"null");
                replaced += 1;
                i += token.len();
            }
            None => {
                out.push(b);
                i += 1;
            }
        }
    }
    (out, replaced)
}

//! Error types for history store operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by [`HistoryStore`](crate::HistoryStore)
///
/// A corrupt backing file is never an error; it loads as an empty history.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The history could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

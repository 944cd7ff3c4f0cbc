//! Flat-file persistence for research topic history

mod config;
mod error;
mod io;
mod store;
mod types;

pub use config::{StoreConfig, DEFAULT_HISTORY_FILE, HISTORY_FILE_ENV};
pub use error::{Result, StoreError};
pub use io::{overwrite, read_if_exists};
pub use store::{HistoryStore, Loaded};
pub use types::{
    now_timestamp, Content, Corruption, HistoryEntry, HistoryRecord, TIMESTAMP_FORMAT,
};

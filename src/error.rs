//! Error Types
//!
//! Failures of the record store and its storage backend. None of them are fatal
//! to the widget; callers log them or surface them inline.

use thiserror::Error;

use crate::models::RecordKind;

/// Errors raised by a key-value storage backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    /// No `window` or no `localStorage` (e.g. storage disabled by the browser)
    #[error("local storage is unavailable")]
    Unavailable,

    /// The browser rejected the call (quota exceeded, security error, ...)
    #[error("storage call failed: {0}")]
    Js(String),
}

/// Errors raised by record store operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("invalid calorie amount: {0:?}")]
    InvalidAmount(String),

    #[error("no {kind} record at index {index} (length {len})")]
    IndexOutOfRange {
        kind: RecordKind,
        index: usize,
        len: usize,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// One key was written and the other was not; the stored lists disagree
    /// until the next successful persist
    #[error("{written} was saved but {failed} was not: {source}")]
    PartialWrite {
        written: String,
        failed: String,
        source: StorageError,
    },
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

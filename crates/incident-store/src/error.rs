//! Error types for the incident store
//!
//! None of these escape the store's mutation API. Storage failures are
//! logged and recorded in [`PersistenceHealth`](crate::PersistenceHealth);
//! the in-memory collection stays authoritative.

use std::path::PathBuf;

/// Errors raised by a [`KeyValueStorage`](crate::KeyValueStorage) backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// IO error on the backing file
    #[error("io error on {path}: {source}")]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Key cannot be mapped onto the backend
    #[error("invalid storage key: '{0}'")]
    InvalidKey(String),

    /// Backend-specific failure (quota exceeded, unavailable, ...)
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StorageError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Why the durable slot could not supply the collection at startup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HydrationError {
    /// Nothing stored under the key
    #[error("no saved incidents under the storage key")]
    Missing,

    /// Slot exists but holds only whitespace
    #[error("saved incidents slot is empty")]
    Empty,

    /// Slot content is not a valid incident array
    #[error("saved incidents are malformed: {0}")]
    Malformed(String),

    /// Backend failed while reading
    #[error("reading saved incidents failed: {0}")]
    ReadFailed(String),
}

/// Errors while writing the collection to the durable slot
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Collection could not be encoded
    #[error("failed to encode incidents: {0}")]
    Encode(#[from] serde_json::Error),

    /// Backend rejected the write
    #[error(transparent)]
    Storage(#[from] StorageError),
}

//! Durable key-value backends
//!
//! The store persists its whole collection as one text value under one key.
//! Anything that can get and set a string by key can back it: the in-memory
//! map used by tests, a directory of files, or an embedded database.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StorageError;
use std::sync::Arc;

/// A named-slot text store
///
/// # Contract
/// - `get` returns `Ok(None)` when nothing is stored under `key`
/// - `set` replaces the whole value under `key`
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStorage {
    /// Read the value under `key`
    ///
    /// # Errors
    /// Returns error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value under `key`
    ///
    /// # Errors
    /// Returns error if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

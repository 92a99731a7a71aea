//! In-memory backend

use super::KeyValueStorage;
use crate::error::StorageError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Process-local key-value map
///
/// Clones share the same map, so a test can hand one handle to a store and
/// inspect or tamper with the slot through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create empty storage
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage with one slot already filled
    #[must_use]
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.inner.lock().insert(key.into(), value.into());
        storage
    }

    /// Raw value under `key`, bypassing the trait
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner.lock().get(key).cloned()
    }

    /// Drop the value under `key`
    pub fn remove(&self, key: &str) -> Option<String> {
        self.inner.lock().remove(key)
    }

    /// Number of filled slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// True if no slot is filled
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.inner.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

//! Store configuration

use serde::{Deserialize, Serialize};

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "ai-safety-incidents";

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Name of the durable slot holding the collection
    pub storage_key: String,
    /// Fall back to the built-in sample set when the slot is unusable.
    /// When `false` the store starts empty instead.
    pub seed_when_missing: bool,
}

impl StoreConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With storage key
    #[inline]
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// With seed fallback toggle
    #[inline]
    #[must_use]
    pub fn with_seed_when_missing(mut self, seed: bool) -> Self {
        self.seed_when_missing = seed;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed_when_missing: true,
        }
    }
}

//! Memoised list views using moka
//!
//! A view depends only on (collection version, filter, sort). Entries are
//! shared `Arc<[Incident]>` snapshots, so repeated reads with unchanged
//! inputs hand back the same allocation.

use crate::criteria::{SeverityFilter, SortOrder};
use incident_model::Incident;
use moka::sync::Cache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Cache key: everything a list view depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewKey {
    /// Store version the view was derived from
    pub version: u64,
    /// Severity filter
    pub filter: SeverityFilter,
    /// Sort order
    pub sort: SortOrder,
}

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of entries in cache (approximate)
    pub entry_count: u64,
    /// Views actually computed (cache misses)
    pub computations: u64,
}

/// Bounded memo of list views
///
/// Keys carry the version of a single store; do not share one cache
/// between stores.
#[derive(Debug)]
pub struct ViewCache {
    inner: Cache<ViewKey, Arc<[Incident]>>,
    computations: AtomicU64,
}

impl ViewCache {
    /// Create cache holding at most `max_capacity` views
    #[inline]
    #[must_use]
    pub fn new(max_capacity: u64) -> Self {
        Self {
            inner: Cache::builder().max_capacity(max_capacity).build(),
            computations: AtomicU64::new(0),
        }
    }

    /// Cached view for `key`, computing it with `f` on a miss
    pub fn get_or_compute<F>(&self, key: ViewKey, f: F) -> Arc<[Incident]>
    where
        F: FnOnce() -> Vec<Incident>,
    {
        self.inner.get_with(key, || {
            self.computations.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(
                "Deriving view v{} filter={} sort={}",
                key.version,
                key.filter,
                key.sort
            );
            Arc::from(f())
        })
    }

    /// Cached view for `key`, if present
    #[inline]
    #[must_use]
    pub fn get(&self, key: &ViewKey) -> Option<Arc<[Incident]>> {
        self.inner.get(key)
    }

    /// Drop every cached view
    #[inline]
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }

    /// Cache statistics
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.inner.entry_count(),
            computations: self.computations.load(Ordering::Relaxed),
        }
    }
}

impl Default for ViewCache {
    /// Create cache with default capacity (64 views)
    fn default() -> Self {
        Self::new(64)
    }
}

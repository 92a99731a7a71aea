//! Dashboard controller
//!
//! Binds one [`IncidentStore`] to the current list controls. The dashboard
//! owns the store outright; there is no ambient instance.

use crate::cache::{CacheStats, ViewCache, ViewKey};
use crate::criteria::{SeverityFilter, SortOrder};
use crate::pipeline::filter_and_sort;
use crate::summary::{DashboardSummary, ViewConfig};
use chrono::{DateTime, Utc};
use incident_model::{Incident, IncidentDraft, IncidentId, ValidationErrors};
use incident_store::{Clock, HydrationSource, IncidentStore, KeyValueStorage, SystemClock};
use std::sync::Arc;

/// Store plus the active filter and sort
#[derive(Debug)]
pub struct Dashboard<S, C = SystemClock> {
    store: IncidentStore<S, C>,
    filter: SeverityFilter,
    sort: SortOrder,
    cache: ViewCache,
    config: ViewConfig,
}

impl<S: KeyValueStorage, C: Clock> Dashboard<S, C> {
    /// Create dashboard over `store`
    ///
    /// Filter and sort start at the configured defaults.
    #[must_use]
    pub fn new(store: IncidentStore<S, C>, config: ViewConfig) -> Self {
        Self {
            store,
            filter: config.default_filter,
            sort: config.default_sort,
            cache: ViewCache::new(config.cache_capacity),
            config,
        }
    }

    /// Hydrate the underlying store
    pub fn initialize(&mut self) -> HydrationSource {
        let source = self.store.initialize();
        self.cache.invalidate_all();
        source
    }

    /// Active filter
    #[inline]
    #[must_use]
    pub fn filter(&self) -> SeverityFilter {
        self.filter
    }

    /// Active sort
    #[inline]
    #[must_use]
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Change the filter
    pub fn set_filter(&mut self, filter: SeverityFilter) {
        self.filter = filter;
    }

    /// Change the sort
    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    /// Restore the configured default filter and sort
    pub fn reset_controls(&mut self) {
        self.filter = self.config.default_filter;
        self.sort = self.config.default_sort;
    }

    /// Filtered, sorted list for the current controls
    ///
    /// Recomputed only when the collection version, filter or sort changed
    /// since the last call with the same inputs.
    #[must_use]
    pub fn incidents(&self) -> Arc<[Incident]> {
        let key = ViewKey {
            version: self.store.version(),
            filter: self.filter,
            sort: self.sort,
        };
        self.cache
            .get_or_compute(key, || filter_and_sort(self.store.read(), self.filter, self.sort))
    }

    /// Validate a report draft and file it
    ///
    /// # Errors
    /// Returns the field errors without touching the store when the title or
    /// description is blank; no id is consumed.
    pub fn report(&mut self, draft: IncidentDraft) -> Result<Incident, ValidationErrors> {
        if let Err(errors) = draft.validate() {
            tracing::debug!("Rejected report: {}", errors);
            return Err(errors);
        }
        let incident = self.store.create(draft);
        self.cache.invalidate_all();
        tracing::info!("Reported incident {}: {}", incident.id, incident.title);
        Ok(incident)
    }

    /// Replace an existing incident; `false` if the id is unknown
    pub fn update(&mut self, incident: Incident) -> bool {
        let before = self.store.version();
        let updated = self.store.update(incident);
        self.invalidate_if_changed(before);
        updated
    }

    /// Remove an incident; `false` if the id is unknown
    pub fn delete(&mut self, id: IncidentId) -> bool {
        let before = self.store.version();
        let deleted = self.store.delete(id);
        self.invalidate_if_changed(before);
        deleted
    }

    /// Summary panels over the current list view
    #[must_use]
    pub fn summary(&self, as_of: DateTime<Utc>) -> DashboardSummary {
        DashboardSummary::compute(&self.incidents(), as_of, &self.config)
    }

    /// Summary panels stamped with the store's clock
    #[must_use]
    pub fn summary_now(&self) -> DashboardSummary {
        self.summary(self.store.clock().now())
    }

    /// Underlying store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &IncidentStore<S, C> {
        &self.store
    }

    /// View configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// List-view cache statistics
    #[inline]
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Give back the store
    #[must_use]
    pub fn into_store(self) -> IncidentStore<S, C> {
        self.store
    }

    fn invalidate_if_changed(&self, before: u64) {
        if self.store.version() != before {
            self.cache.invalidate_all();
        }
    }
}

//! Incident Views
//!
//! Pure derivations over an incident collection, plus the controller that
//! binds a store to the list controls.
//!
//! # Core Concepts
//!
//! - [`filter_and_sort`]: Severity filter then stable sort
//! - [`severity_counts`], [`severity_distribution`]: Counts and whole-percent shares
//! - [`daily_counts`]: Trailing per-day counts ending at an injected date
//! - [`most_recent`]: Newest-first top N
//! - [`DashboardSummary`]: Everything the chart panels need in one value
//! - [`ViewCache`]: Memo of list views keyed on (version, filter, sort)
//! - [`Dashboard`]: Store + active controls + memo
//!
//! # Example
//!
//! ```rust,ignore
//! use incident_store::{IncidentStore, MemoryStorage, StoreConfig};
//! use incident_view::{Dashboard, SeverityFilter, SortOrder, ViewConfig};
//!
//! let store = IncidentStore::new(MemoryStorage::new(), StoreConfig::default());
//! let mut dashboard = Dashboard::new(store, ViewConfig::default());
//! dashboard.initialize();
//!
//! dashboard.set_sort(SortOrder::SeverityDescending);
//! for incident in dashboard.incidents().iter() {
//!     println!("{} {}", incident.severity, incident.title);
//! }
//! ```

#![warn(unreachable_pub)]

mod aggregate;
mod cache;
mod criteria;
mod dashboard;
mod pipeline;
mod summary;

// Re-exports
pub use aggregate::{
    daily_counts, severity_counts, severity_distribution, DailyCount, SeverityCounts,
    SeverityShare,
};
pub use cache::{CacheStats, ViewCache, ViewKey};
pub use criteria::{ParseCriterionError, SeverityFilter, SortOrder};
pub use dashboard::Dashboard;
pub use pipeline::{filter_and_sort, most_recent};
pub use summary::{DashboardSummary, ViewConfig};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

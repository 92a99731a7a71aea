//! Summary consumed by the chart and recent-incident panels

use crate::aggregate::{
    daily_counts, severity_counts, severity_distribution, DailyCount, SeverityCounts,
    SeverityShare,
};
use crate::criteria::{SeverityFilter, SortOrder};
use crate::pipeline::most_recent;
use chrono::{DateTime, Utc};
use incident_model::Incident;
use serde::{Deserialize, Serialize};

/// View configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Days covered by the daily chart, ending today
    pub window_days: u32,
    /// Entries in the recent-incidents panel
    pub recent_limit: usize,
    /// Filter applied when a dashboard opens
    pub default_filter: SeverityFilter,
    /// Sort applied when a dashboard opens
    pub default_sort: SortOrder,
    /// Maximum memoised list views
    pub cache_capacity: u64,
}

impl ViewConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With chart window
    #[inline]
    #[must_use]
    pub fn with_window_days(mut self, days: u32) -> Self {
        self.window_days = days;
        self
    }

    /// With recent-incidents limit
    #[inline]
    #[must_use]
    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            window_days: 7,
            recent_limit: 3,
            default_filter: SeverityFilter::All,
            default_sort: SortOrder::NewestFirst,
            cache_capacity: 64,
        }
    }
}

/// Everything the summary panels render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    /// Incidents summarised
    pub total: usize,
    /// Per-severity counts
    pub counts: SeverityCounts,
    /// Pie rows with percentages
    pub distribution: Vec<SeverityShare>,
    /// Trailing per-day counts, oldest first
    pub daily: Vec<DailyCount>,
    /// Newest incidents, newest first
    pub recent: Vec<Incident>,
}

impl DashboardSummary {
    /// Summarise `incidents` as of `as_of`
    #[must_use]
    pub fn compute(incidents: &[Incident], as_of: DateTime<Utc>, config: &ViewConfig) -> Self {
        let counts = severity_counts(incidents);
        Self {
            total: incidents.len(),
            counts,
            distribution: severity_distribution(&counts),
            daily: daily_counts(incidents, config.window_days, as_of),
            recent: most_recent(incidents, config.recent_limit),
        }
    }
}

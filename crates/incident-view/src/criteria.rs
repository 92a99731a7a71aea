//! Filter and sort criteria chosen by the list controls

use incident_model::{Incident, Severity};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Error for an unrecognised filter or sort label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCriterionError {
    /// Not `All` or a severity
    #[error("unknown severity filter: '{0}' (expected All, Low, Medium or High)")]
    Filter(String),

    /// Not one of the four sort orders
    #[error(
        "unknown sort order: '{0}' (expected Newest First, Oldest First, \
         Severity (High to Low) or Severity (Low to High))"
    )]
    Sort(String),
}

/// Severity filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SeverityFilter {
    /// Keep everything
    #[default]
    All,
    /// Keep only incidents with exactly this severity
    Only(Severity),
}

impl SeverityFilter {
    /// True if `incident` passes the filter
    #[inline]
    #[must_use]
    pub fn matches(self, incident: &Incident) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(severity) => incident.severity == severity,
        }
    }
}

impl From<Severity> for SeverityFilter {
    fn from(severity: Severity) -> Self {
        SeverityFilter::Only(severity)
    }
}

impl fmt::Display for SeverityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityFilter::All => f.write_str("All"),
            SeverityFilter::Only(severity) => write!(f, "{severity}"),
        }
    }
}

impl FromStr for SeverityFilter {
    type Err = ParseCriterionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(SeverityFilter::All);
        }
        s.parse::<Severity>()
            .map(SeverityFilter::Only)
            .map_err(|_| ParseCriterionError::Filter(s.to_string()))
    }
}

impl From<SeverityFilter> for String {
    fn from(filter: SeverityFilter) -> Self {
        filter.to_string()
    }
}

impl TryFrom<String> for SeverityFilter {
    type Error = ParseCriterionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Order of the incident list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SortOrder {
    /// Latest `reported_at` first
    #[default]
    NewestFirst,
    /// Earliest `reported_at` first
    OldestFirst,
    /// High, then Medium, then Low
    SeverityDescending,
    /// Low, then Medium, then High
    SeverityAscending,
}

impl SortOrder {
    /// All orders, in the order the controls list them
    pub const ALL: [SortOrder; 4] = [
        SortOrder::NewestFirst,
        SortOrder::OldestFirst,
        SortOrder::SeverityDescending,
        SortOrder::SeverityAscending,
    ];

    /// Label shown in the sort control
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::NewestFirst => "Newest First",
            SortOrder::OldestFirst => "Oldest First",
            SortOrder::SeverityDescending => "Severity (High to Low)",
            SortOrder::SeverityAscending => "Severity (Low to High)",
        }
    }

    /// Comparator for a stable sort
    ///
    /// Timestamps compare as instants, severities by rank. Equal keys
    /// compare `Equal` so a stable sort keeps their relative order.
    #[must_use]
    pub fn compare(self, a: &Incident, b: &Incident) -> Ordering {
        match self {
            SortOrder::NewestFirst => b.reported_at.cmp(&a.reported_at),
            SortOrder::OldestFirst => a.reported_at.cmp(&b.reported_at),
            SortOrder::SeverityDescending => b.severity.rank().cmp(&a.severity.rank()),
            SortOrder::SeverityAscending => a.severity.rank().cmp(&b.severity.rank()),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortOrder {
    type Err = ParseCriterionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let order = match normalized.as_str() {
            "newest first" | "newest" | "newest-first" => SortOrder::NewestFirst,
            "oldest first" | "oldest" | "oldest-first" => SortOrder::OldestFirst,
            "severity (high to low)" | "high-low" | "severity-desc" => {
                SortOrder::SeverityDescending
            }
            "severity (low to high)" | "low-high" | "severity-asc" => SortOrder::SeverityAscending,
            _ => return Err(ParseCriterionError::Sort(s.to_string())),
        };
        Ok(order)
    }
}

impl From<SortOrder> for String {
    fn from(order: SortOrder) -> Self {
        order.label().to_string()
    }
}

impl TryFrom<String> for SortOrder {
    type Error = ParseCriterionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

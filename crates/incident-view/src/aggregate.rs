//! Aggregates for the summary charts

use chrono::{DateTime, Days, NaiveDate, Utc};
use incident_model::{Incident, Severity};
use serde::Serialize;

/// Count of incidents per severity
///
/// All three severities are always present; missing ones count zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    /// Low-severity incidents
    #[serde(rename = "Low")]
    pub low: usize,
    /// Medium-severity incidents
    #[serde(rename = "Medium")]
    pub medium: usize,
    /// High-severity incidents
    #[serde(rename = "High")]
    pub high: usize,
}

impl SeverityCounts {
    /// Count for one severity
    #[inline]
    #[must_use]
    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
        }
    }

    /// Sum over all severities
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }

    /// Share of `severity` as a whole percent, rounded half up
    ///
    /// Zero when there are no incidents at all.
    #[must_use]
    pub fn percentage(&self, severity: Severity) -> u8 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        let rounded = (self.get(severity) * 200 + total) / (2 * total);
        u8::try_from(rounded).unwrap_or(100)
    }

    fn bump(&mut self, severity: Severity) {
        match severity {
            Severity::Low => self.low += 1,
            Severity::Medium => self.medium += 1,
            Severity::High => self.high += 1,
        }
    }
}

/// Count incidents by severity
#[must_use]
pub fn severity_counts(incidents: &[Incident]) -> SeverityCounts {
    incidents.iter().fold(SeverityCounts::default(), |mut counts, incident| {
        counts.bump(incident.severity);
        counts
    })
}

/// One slice of the severity distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityShare {
    /// Severity of this slice
    pub severity: Severity,
    /// Incidents with this severity
    pub count: usize,
    /// Whole-percent share of the total
    pub percentage: u8,
}

/// Distribution rows in `Low, Medium, High` order
#[must_use]
pub fn severity_distribution(counts: &SeverityCounts) -> Vec<SeverityShare> {
    Severity::ALL
        .iter()
        .map(|&severity| SeverityShare {
            severity,
            count: counts.get(severity),
            percentage: counts.percentage(severity),
        })
        .collect()
}

/// Incidents reported on one UTC calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    /// The day
    pub date: NaiveDate,
    /// Incidents whose `reported_at` falls on `date`
    pub count: usize,
}

impl DailyCount {
    /// `MM/DD` axis label
    #[must_use]
    pub fn label(&self) -> String {
        self.date.format("%m/%d").to_string()
    }
}

/// Per-day counts for the `window_days` days ending on `as_of`'s date
///
/// Oldest day first, one entry per day including empty days. Incidents
/// outside the window are ignored. `as_of` is a parameter, not the system
/// clock, so callers decide what "today" is.
#[must_use]
pub fn daily_counts(
    incidents: &[Incident],
    window_days: u32,
    as_of: DateTime<Utc>,
) -> Vec<DailyCount> {
    let end = as_of.date_naive();
    let mut buckets: Vec<DailyCount> = (0..window_days)
        .rev()
        .filter_map(|back| end.checked_sub_days(Days::new(u64::from(back))))
        .map(|date| DailyCount { date, count: 0 })
        .collect();

    let Some(start) = buckets.first().map(|b| b.date) else {
        return buckets;
    };

    for incident in incidents {
        let day = incident.reported_on();
        if day < start || day > end {
            continue;
        }
        if let Ok(offset) = usize::try_from((day - start).num_days()) {
            if let Some(bucket) = buckets.get_mut(offset) {
                bucket.count += 1;
            }
        }
    }

    buckets
}

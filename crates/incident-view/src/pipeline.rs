//! Filtered and ordered views of a collection

use crate::criteria::{SeverityFilter, SortOrder};
use incident_model::Incident;

/// Filter, then stable-sort, into a new vector
///
/// The input is never modified. Incidents with equal sort keys keep their
/// relative order from `incidents`.
#[must_use]
pub fn filter_and_sort(
    incidents: &[Incident],
    filter: SeverityFilter,
    sort: SortOrder,
) -> Vec<Incident> {
    let mut view: Vec<Incident> = incidents
        .iter()
        .filter(|incident| filter.matches(incident))
        .cloned()
        .collect();
    view.sort_by(|a, b| sort.compare(a, b));
    view
}

/// The `n` most recently reported incidents, newest first
#[must_use]
pub fn most_recent(incidents: &[Incident], n: usize) -> Vec<Incident> {
    let mut view = filter_and_sort(incidents, SeverityFilter::All, SortOrder::NewestFirst);
    view.truncate(n);
    view
}

//! Property tests for the derivation functions.

use chrono::{DateTime, Duration, TimeZone, Utc};
use incident_model::{Incident, IncidentId, Severity};
use incident_view::{
    daily_counts, filter_and_sort, most_recent, severity_counts, SeverityFilter, SortOrder,
};
use proptest::prelude::*;

fn severity() -> impl Strategy<Value = Severity> {
    prop_oneof![Just(Severity::Low), Just(Severity::Medium), Just(Severity::High)]
}

fn filter() -> impl Strategy<Value = SeverityFilter> {
    prop_oneof![Just(SeverityFilter::All), severity().prop_map(SeverityFilter::Only)]
}

fn sort() -> impl Strategy<Value = SortOrder> {
    prop_oneof![
        Just(SortOrder::NewestFirst),
        Just(SortOrder::OldestFirst),
        Just(SortOrder::SeverityDescending),
        Just(SortOrder::SeverityAscending),
    ]
}

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()
}

// Timestamps within ~60 days, often colliding so ties get exercised
fn collection() -> impl Strategy<Value = Vec<Incident>> {
    proptest::collection::vec((severity(), 0i64..60 * 24), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (severity, hours))| Incident {
                id: IncidentId(i as u64 + 1),
                title: format!("t{i}"),
                description: format!("d{i}"),
                severity,
                reported_at: base() + Duration::hours(hours),
            })
            .collect()
    })
}

fn sorted_ids(incidents: &[Incident]) -> Vec<IncidentId> {
    let mut ids: Vec<_> = incidents.iter().map(|i| i.id).collect();
    ids.sort();
    ids
}

proptest! {
    #[test]
    fn counts_sum_to_size(incidents in collection()) {
        let counts = severity_counts(&incidents);
        prop_assert_eq!(counts.total(), incidents.len());
        for severity in Severity::ALL {
            prop_assert!(counts.get(severity) <= incidents.len());
        }
    }

    #[test]
    fn view_is_permutation_of_filtered_subset(incidents in collection(), filter in filter(), sort in sort()) {
        let view = filter_and_sort(&incidents, filter, sort);
        let subset: Vec<Incident> = incidents.iter().filter(|i| filter.matches(i)).cloned().collect();

        prop_assert_eq!(view.len(), subset.len());
        prop_assert_eq!(sorted_ids(&view), sorted_ids(&subset));
        for pair in view.windows(2) {
            prop_assert_ne!(sort.compare(&pair[0], &pair[1]), std::cmp::Ordering::Greater);
        }
    }

    #[test]
    fn ties_keep_input_order(incidents in collection(), sort in sort()) {
        let view = filter_and_sort(&incidents, SeverityFilter::All, sort);
        for pair in view.windows(2) {
            if sort.compare(&pair[0], &pair[1]) == std::cmp::Ordering::Equal {
                // ids were assigned in input order
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn derivation_is_idempotent(incidents in collection(), filter in filter(), sort in sort()) {
        let snapshot = incidents.clone();
        let first = filter_and_sort(&incidents, filter, sort);
        let second = filter_and_sort(&incidents, filter, sort);
        prop_assert_eq!(first, second);
        prop_assert_eq!(incidents, snapshot);
    }

    #[test]
    fn daily_window_has_exact_length(incidents in collection(), window in 0u32..45, offset_days in 0i64..90) {
        let as_of = base() + Duration::days(offset_days);
        let days = daily_counts(&incidents, window, as_of);

        prop_assert_eq!(days.len(), window as usize);
        if let Some(last) = days.last() {
            prop_assert_eq!(last.date, as_of.date_naive());
        }
        for pair in days.windows(2) {
            prop_assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }

        let in_window = incidents
            .iter()
            .filter(|i| days.iter().any(|d| d.date == i.reported_on()))
            .count();
        prop_assert_eq!(days.iter().map(|d| d.count).sum::<usize>(), in_window);
    }

    #[test]
    fn most_recent_is_newest_prefix(incidents in collection(), n in 0usize..10) {
        let recent = most_recent(&incidents, n);
        prop_assert_eq!(recent.len(), n.min(incidents.len()));

        let newest = filter_and_sort(&incidents, SeverityFilter::All, SortOrder::NewestFirst);
        prop_assert_eq!(recent.as_slice(), &newest[..recent.len()]);
    }
}

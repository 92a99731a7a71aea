//! Testing utilities for the incident board workspace
//!
//! Shared fixtures: incidents from compact literals, the seed set, and
//! stores wired to in-memory storage and a fixed clock.

#![allow(missing_docs)]

use chrono::{DateTime, TimeZone, Utc};
use incident_model::{seed_incidents, Incident, IncidentId, Severity};
use incident_store::{FixedClock, IncidentStore, MemoryStorage, StoreConfig, DEFAULT_STORAGE_KEY};

/// Incident with placeholder text, reported at an RFC 3339 instant
pub fn incident(id: u64, severity: Severity, reported_at: &str) -> Incident {
    Incident {
        id: IncidentId(id),
        title: format!("Incident {id}"),
        description: format!("Details for incident {id}"),
        severity,
        reported_at: DateTime::parse_from_rfc3339(reported_at)
            .unwrap()
            .with_timezone(&Utc),
    }
}

/// The built-in sample set
pub fn seed() -> Vec<Incident> {
    seed_incidents()
}

/// Day of the newest seed incident, midday UTC
pub fn seed_as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 10, 12, 0, 0).unwrap()
}

/// Clock two days after the newest seed incident
pub fn fixed_clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2025, 4, 12, 9, 0, 0).unwrap())
}

/// Storage whose slot already holds `incidents`
pub fn storage_with(incidents: &[Incident]) -> MemoryStorage {
    MemoryStorage::with_value(DEFAULT_STORAGE_KEY, serde_json::to_string(incidents).unwrap())
}

/// Unhydrated store over empty storage; hydration will seed it
pub fn seeded_store() -> IncidentStore<MemoryStorage, FixedClock> {
    IncidentStore::with_clock(MemoryStorage::new(), StoreConfig::default(), fixed_clock())
}

/// Hydrated store holding exactly `incidents`
pub fn store_with(incidents: &[Incident]) -> IncidentStore<MemoryStorage, FixedClock> {
    let mut store =
        IncidentStore::with_clock(storage_with(incidents), StoreConfig::default(), fixed_clock());
    store.initialize();
    store
}

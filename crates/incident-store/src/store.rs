//! The canonical incident collection
//!
//! [`IncidentStore`] is the single writer of the collection. Every effective
//! mutation rewrites the whole collection into one durable slot. Durability
//! problems are contained here: they are logged and counted, and never undo
//! or block an in-memory change.

use crate::backend::KeyValueStorage;
use crate::clock::{Clock, SystemClock};
use crate::config::StoreConfig;
use crate::error::{HydrationError, PersistError};
use incident_model::{seed_incidents, Incident, IncidentDraft, IncidentId};

/// Where the collection came from at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HydrationSource {
    /// Loaded verbatim from the durable slot
    Storage {
        /// Number of incidents loaded
        count: usize,
    },
    /// Slot unusable; built-in sample set used
    Seed(HydrationError),
    /// Slot unusable and seeding disabled; started empty
    Empty(HydrationError),
}

impl HydrationSource {
    /// True if the slot supplied the collection
    #[inline]
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }

    /// Reason the slot was not used, if it wasn't
    #[must_use]
    pub fn fallback_reason(&self) -> Option<&HydrationError> {
        match self {
            Self::Storage { .. } => None,
            Self::Seed(reason) | Self::Empty(reason) => Some(reason),
        }
    }
}

/// Outcome of durable writes so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistenceHealth {
    /// Successful writes
    pub writes: u64,
    /// Failed writes
    pub failed_writes: u64,
    /// Most recent read or write failure
    pub last_error: Option<String>,
}

impl PersistenceHealth {
    /// True if no write has failed
    #[inline]
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.failed_writes == 0
    }
}

/// Owner of the canonical incident collection
///
/// # Lifecycle
/// 1. Constructed holding the fallback collection (seed set unless disabled).
///    Nothing is written yet.
/// 2. [`initialize`](Self::initialize) reads the durable slot once and
///    replaces the collection with its contents or keeps the fallback.
/// 3. From then on every effective `create`/`update`/`delete` writes the
///    full collection back.
///
/// Mutations before step 2 apply in memory only, so an unread slot is never
/// clobbered by the fallback.
#[derive(Debug)]
pub struct IncidentStore<S, C = SystemClock> {
    storage: S,
    clock: C,
    config: StoreConfig,
    incidents: Vec<Incident>,
    hydration: Option<HydrationSource>,
    version: u64,
    health: PersistenceHealth,
}

impl<S: KeyValueStorage> IncidentStore<S, SystemClock> {
    /// Create store stamping reports with the wall clock
    #[must_use]
    pub fn new(storage: S, config: StoreConfig) -> Self {
        Self::with_clock(storage, config, SystemClock)
    }
}

impl<S: KeyValueStorage, C: Clock> IncidentStore<S, C> {
    /// Create store with an explicit clock
    #[must_use]
    pub fn with_clock(storage: S, config: StoreConfig, clock: C) -> Self {
        let incidents = fallback_collection(&config);
        Self {
            storage,
            clock,
            config,
            incidents,
            hydration: None,
            version: 0,
            health: PersistenceHealth::default(),
        }
    }

    /// Hydrate from the durable slot
    ///
    /// Reads the slot exactly once per store. A second call returns the
    /// recorded outcome without touching storage.
    pub fn initialize(&mut self) -> HydrationSource {
        if let Some(source) = &self.hydration {
            return source.clone();
        }

        let source = match self.load() {
            Ok(incidents) => {
                tracing::info!(
                    "Loaded {} incidents from '{}'",
                    incidents.len(),
                    self.config.storage_key
                );
                let count = incidents.len();
                self.incidents = incidents;
                HydrationSource::Storage { count }
            }
            Err(reason) => {
                if let HydrationError::Missing = reason {
                    tracing::info!("No saved incidents under '{}'", self.config.storage_key);
                } else {
                    tracing::warn!("Ignoring saved incidents: {}", reason);
                    self.health.last_error = Some(reason.to_string());
                }
                self.incidents = fallback_collection(&self.config);
                if self.config.seed_when_missing {
                    HydrationSource::Seed(reason)
                } else {
                    HydrationSource::Empty(reason)
                }
            }
        };

        self.hydration = Some(source.clone());
        self.version += 1;
        self.persist();
        source
    }

    /// File a new incident
    ///
    /// Assigns the next id (one past the largest present, or 1) and stamps
    /// `reported_at` from the clock. The draft is not validated here; callers
    /// check it with [`IncidentDraft::validate`] first.
    pub fn create(&mut self, draft: IncidentDraft) -> Incident {
        let incident = Incident::from_draft(draft, self.next_id(), self.clock.now());
        tracing::debug!("Creating incident {} ({})", incident.id, incident.severity);

        self.incidents.push(incident.clone());
        self.version += 1;
        self.persist();
        incident
    }

    /// Replace the incident with the same id
    ///
    /// The stored `reported_at` is kept. Returns `false` and changes nothing
    /// if the id is unknown.
    pub fn update(&mut self, mut incident: Incident) -> bool {
        let Some(slot) = self.incidents.iter_mut().find(|i| i.id == incident.id) else {
            tracing::debug!("Update ignored: no incident {}", incident.id);
            return false;
        };

        incident.reported_at = slot.reported_at;
        if *slot == incident {
            return true;
        }

        tracing::debug!("Updating incident {}", incident.id);
        *slot = incident;
        self.version += 1;
        self.persist();
        true
    }

    /// Remove the incident with `id`
    ///
    /// Returns `false` and changes nothing if the id is unknown.
    pub fn delete(&mut self, id: IncidentId) -> bool {
        let before = self.incidents.len();
        self.incidents.retain(|i| i.id != id);
        if self.incidents.len() == before {
            tracing::debug!("Delete ignored: no incident {}", id);
            return false;
        }

        tracing::debug!("Deleted incident {}", id);
        self.version += 1;
        self.persist();
        true
    }

    /// Current collection
    #[inline]
    #[must_use]
    pub fn read(&self) -> &[Incident] {
        &self.incidents
    }

    /// Incident with `id`
    #[must_use]
    pub fn get(&self, id: IncidentId) -> Option<&Incident> {
        self.incidents.iter().find(|i| i.id == id)
    }

    /// Number of incidents
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    /// True if the collection is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    /// Collection version, bumped by hydration and each effective mutation
    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// True once the durable slot has been read
    #[inline]
    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.hydration.is_some()
    }

    /// Hydration outcome, if hydrated
    #[inline]
    #[must_use]
    pub fn hydration(&self) -> Option<&HydrationSource> {
        self.hydration.as_ref()
    }

    /// Durable write statistics
    #[inline]
    #[must_use]
    pub fn health(&self) -> &PersistenceHealth {
        &self.health
    }

    /// Store configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Storage backend
    #[inline]
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Clock used for report timestamps
    #[inline]
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn next_id(&self) -> IncidentId {
        let Some(max) = self.incidents.iter().map(|i| i.id).max() else {
            return IncidentId::FIRST;
        };
        if let Some(next) = max.checked_next() {
            return next;
        }

        // Ids are exhausted at the top; reuse the lowest gap instead.
        let mut taken: Vec<u64> = self.incidents.iter().map(|i| i.id.0).collect();
        taken.sort_unstable();
        taken.dedup();
        let gap = taken
            .iter()
            .zip(1u64..)
            .find(|(id, candidate)| **id != *candidate)
            .map_or(IncidentId::FIRST, |(_, candidate)| IncidentId(candidate));
        tracing::warn!("Largest incident id {} reached; assigning free id {}", max, gap);
        gap
    }

    fn load(&self) -> Result<Vec<Incident>, HydrationError> {
        let raw = self
            .storage
            .get(&self.config.storage_key)
            .map_err(|e| HydrationError::ReadFailed(e.to_string()))?
            .ok_or(HydrationError::Missing)?;

        if raw.trim().is_empty() {
            return Err(HydrationError::Empty);
        }

        serde_json::from_str(&raw).map_err(|e| HydrationError::Malformed(e.to_string()))
    }

    fn persist(&mut self) {
        if !self.is_hydrated() {
            tracing::debug!("Skipping write: storage not read yet");
            return;
        }

        match self.write_collection() {
            Ok(()) => self.health.writes += 1,
            Err(e) => {
                tracing::warn!(
                    "Failed to save incidents to '{}': {}",
                    self.config.storage_key,
                    e
                );
                self.health.failed_writes += 1;
                self.health.last_error = Some(e.to_string());
            }
        }
    }

    fn write_collection(&self) -> Result<(), PersistError> {
        let encoded = serde_json::to_string(&self.incidents)?;
        self.storage.set(&self.config.storage_key, &encoded)?;
        Ok(())
    }
}

fn fallback_collection(config: &StoreConfig) -> Vec<Incident> {
    if config.seed_when_missing {
        seed_incidents()
    } else {
        Vec::new()
    }
}

//! Incident Store
//!
//! Owns the canonical incident collection and keeps it in sync with a single
//! durable key-value slot.
//!
//! # Architecture
//!
//! ```text
//! create / update / delete ──▶ IncidentStore ──▶ serde_json ──▶ KeyValueStorage
//!                                   ▲                               │
//!                                   └──────── initialize() ◀────────┘
//! ```
//!
//! - [`IncidentStore`]: single writer; persists the whole collection after
//!   every effective mutation, never before the slot has been read once
//! - [`KeyValueStorage`]: pluggable durable slot ([`MemoryStorage`], [`FileStorage`])
//! - [`Clock`]: source of `reported_at` ([`SystemClock`], [`FixedClock`])
//!
//! # Example
//!
//! ```rust,ignore
//! use incident_model::{IncidentDraft, Severity};
//! use incident_store::{FileStorage, IncidentStore, StoreConfig};
//!
//! let storage = FileStorage::new("./data")?;
//! let mut store = IncidentStore::new(storage, StoreConfig::default());
//! store.initialize();
//!
//! let incident = store.create(IncidentDraft::new("Leak", "Session ids exposed", Severity::Low));
//! assert_eq!(store.get(incident.id), Some(&incident));
//! ```

#![warn(unreachable_pub)]

pub mod backend;
pub mod clock;
pub mod config;
pub mod error;
mod store;

// Re-exports
pub use backend::{FileStorage, KeyValueStorage, MemoryStorage};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{StoreConfig, DEFAULT_STORAGE_KEY};
pub use error::{HydrationError, PersistError, StorageError};
pub use store::{HydrationSource, IncidentStore, PersistenceHealth};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

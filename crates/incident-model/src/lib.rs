//! Incident Model
//!
//! Shared types for the incident board.
//!
//! # Core Concepts
//!
//! - [`Incident`]: A filed incident with store-assigned `id` and `reported_at`
//! - [`IncidentDraft`]: What a reporter submits before the store fills in the rest
//! - [`Severity`]: Ordinal impact classification (`Low < Medium < High`)
//! - [`ValidationErrors`]: Field-level failures from [`IncidentDraft::validate`]
//! - [`seed_incidents`]: Built-in sample set
//!
//! # Example
//!
//! ```rust,ignore
//! use incident_model::{IncidentDraft, Severity};
//!
//! let draft = IncidentDraft::new("Chatbot leak", "Exposed session metadata", Severity::Low);
//! draft.validate()?;
//! ```

#![warn(unreachable_pub)]

mod incident;
mod seed;
mod severity;
mod validation;

// Re-exports
pub use incident::{Incident, IncidentDraft, IncidentId};
pub use seed::seed_incidents;
pub use severity::{ParseSeverityError, Severity};
pub use validation::{Field, ValidationErrors};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

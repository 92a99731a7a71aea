//! Incident Board
//!
//! Command-line front end over the incident store and views: report,
//! list, edit and summarise incidents kept in a local data directory.
//!
//! # Example
//!
//! ```text
//! incident-board report --title "Prompt leak" --description "..." --severity High
//! incident-board list --severity high --sort "Oldest First"
//! incident-board summary --json
//! ```
//!
//! Logging is controlled by `INCIDENT_BOARD_LOG` (an `EnvFilter` directive),
//! falling back to `log_filter` from the configuration file.

#![warn(unreachable_pub)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod render;

pub use commands::{open_dashboard, FileDashboard, IncidentPatch, ListOptions};
pub use config::BoardConfig;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Board configuration loaded from TOML
//!
//! ```toml
//! data_dir = "/var/lib/incident-board"
//! log_filter = "incident_store=debug,info"
//! json_logs = false
//!
//! [store]
//! storage_key = "ai-safety-incidents"
//! seed_when_missing = true
//!
//! [view]
//! window_days = 7
//! recent_limit = 3
//! default_sort = "Newest First"
//! ```
//!
//! Every key is optional.

use anyhow::Context;
use incident_store::StoreConfig;
use incident_view::ViewConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Directory holding one JSON file per storage key
    pub data_dir: PathBuf,
    /// Default tracing filter when `INCIDENT_BOARD_LOG` is unset
    pub log_filter: String,
    /// Emit logs as JSON lines
    pub json_logs: bool,
    /// Store settings
    pub store: StoreConfig,
    /// View settings
    pub view: ViewConfig,
}

impl BoardConfig {
    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// Returns an error if the text is not valid TOML for this schema.
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid board configuration")
    }

    /// Load configuration from `path`, or defaults when `path` is `None`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// With data directory
    #[inline]
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".incident-board"),
            log_filter: "info".to_string(),
            json_logs: false,
            store: StoreConfig::default(),
            view: ViewConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use incident_view::{SeverityFilter, SortOrder};

    #[test]
    fn empty_file_is_default() {
        let config = BoardConfig::from_toml_str("").unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn nested_sections_override_defaults() {
        let config = BoardConfig::from_toml_str(
            r#"
            log_filter = "debug"

            [store]
            storage_key = "lab-incidents"

            [view]
            window_days = 14
            default_filter = "High"
            default_sort = "Severity (High to Low)"
            "#,
        )
        .unwrap();

        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.store.storage_key, "lab-incidents");
        assert!(config.store.seed_when_missing);
        assert_eq!(config.view.window_days, 14);
        assert_eq!(config.view.recent_limit, 3);
        assert_eq!(config.view.default_filter, SeverityFilter::Only(incident_model::Severity::High));
        assert_eq!(config.view.default_sort, SortOrder::SeverityDescending);
    }

    #[test]
    fn unknown_sort_is_rejected() {
        let err = BoardConfig::from_toml_str("[view]\ndefault_sort = \"Sideways\"").unwrap_err();
        assert!(err.to_string().contains("invalid board configuration"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = BoardConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}

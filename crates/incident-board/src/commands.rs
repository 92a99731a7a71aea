//! Command handlers
//!
//! Each handler works on an opened [`Dashboard`] and writes its result to
//! `out`. Handlers are generic over storage and clock so tests can drive
//! them with in-memory fixtures.

use crate::config::BoardConfig;
use crate::render;
use anyhow::{bail, Context};
use incident_model::{Incident, IncidentDraft, IncidentId, Severity};
use incident_store::{Clock, FileStorage, IncidentStore, KeyValueStorage};
use incident_view::{Dashboard, SeverityFilter, SortOrder};
use serde::Serialize;
use std::io::Write;

/// Dashboard persisted to files under the configured data directory
pub type FileDashboard = Dashboard<FileStorage>;

/// Open and hydrate the file-backed dashboard described by `config`
///
/// # Errors
/// Returns an error if the data directory cannot be created.
pub fn open_dashboard(config: &BoardConfig) -> anyhow::Result<FileDashboard> {
    let storage = FileStorage::new(&config.data_dir)
        .with_context(|| format!("cannot open data directory {}", config.data_dir.display()))?;
    let store = IncidentStore::new(storage, config.store.clone());
    let mut dashboard = Dashboard::new(store, config.view.clone());
    let source = dashboard.initialize();
    tracing::debug!("Dashboard ready: {:?}", source);
    Ok(dashboard)
}

/// Options for `list`
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    /// Override the configured filter
    pub filter: Option<SeverityFilter>,
    /// Override the configured sort
    pub sort: Option<SortOrder>,
    /// Print JSON instead of cards
    pub json: bool,
}

/// Changes requested by `update`
#[derive(Debug, Clone, Default)]
pub struct IncidentPatch {
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New severity
    pub severity: Option<Severity>,
}

impl IncidentPatch {
    /// `true` when no field would change
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.severity.is_none()
    }

    fn apply(self, mut incident: Incident) -> Incident {
        if let Some(title) = self.title {
            incident.title = title;
        }
        if let Some(description) = self.description {
            incident.description = description;
        }
        if let Some(severity) = self.severity {
            incident.severity = severity;
        }
        incident
    }
}

#[derive(Serialize)]
struct ListOutput<'a> {
    filter: SeverityFilter,
    sort: SortOrder,
    incidents: &'a [Incident],
}

/// Print the current list view
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn list<S, C, W>(
    dashboard: &mut Dashboard<S, C>,
    options: ListOptions,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: KeyValueStorage,
    C: Clock,
    W: Write,
{
    if let Some(filter) = options.filter {
        dashboard.set_filter(filter);
    }
    if let Some(sort) = options.sort {
        dashboard.set_sort(sort);
    }
    let incidents = dashboard.incidents();

    if options.json {
        let output = ListOutput {
            filter: dashboard.filter(),
            sort: dashboard.sort(),
            incidents: &incidents,
        };
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "{} incident(s), filter: {}, sort: {}\n",
            incidents.len(),
            dashboard.filter(),
            dashboard.sort()
        )?;
        writeln!(out, "{}", render::incident_list(&incidents))?;
    }
    Ok(())
}

/// Validate and file a new incident
///
/// # Errors
/// Returns an error listing the blank fields when the draft is invalid, or
/// when the new collection could not be saved.
pub fn report<S, C, W>(
    dashboard: &mut Dashboard<S, C>,
    draft: IncidentDraft,
    json: bool,
    out: &mut W,
) -> anyhow::Result<Incident>
where
    S: KeyValueStorage,
    C: Clock,
    W: Write,
{
    let failed_before = dashboard.store().health().failed_writes;
    let incident = dashboard
        .report(draft)
        .map_err(|errors| anyhow::Error::new(errors).context("incident report rejected"))?;
    ensure_saved(dashboard, failed_before)?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &incident)?;
        writeln!(out)?;
    } else {
        writeln!(out, "Reported incident #{}", incident.id)?;
        writeln!(out, "{}", render::incident_card(&incident))?;
    }
    Ok(incident)
}

/// Apply `patch` to incident `id`
///
/// # Errors
/// Returns an error if the id is unknown, the patch blanks a required field,
/// or the change could not be saved.
pub fn update<S, C, W>(
    dashboard: &mut Dashboard<S, C>,
    id: IncidentId,
    patch: IncidentPatch,
    out: &mut W,
) -> anyhow::Result<Incident>
where
    S: KeyValueStorage,
    C: Clock,
    W: Write,
{
    let Some(current) = dashboard.store().get(id).cloned() else {
        bail!("no incident with id {id}");
    };
    if patch.is_empty() {
        writeln!(out, "Nothing to change for incident #{id}")?;
        return Ok(current);
    }

    let updated = patch.apply(current);
    IncidentDraft::new(
        updated.title.clone(),
        updated.description.clone(),
        updated.severity,
    )
    .validate()
    .map_err(|errors| anyhow::Error::new(errors).context("incident update rejected"))?;

    let failed_before = dashboard.store().health().failed_writes;
    dashboard.update(updated);
    ensure_saved(dashboard, failed_before)?;

    let stored = dashboard
        .store()
        .get(id)
        .cloned()
        .with_context(|| format!("incident {id} vanished during update"))?;
    writeln!(out, "Updated incident #{id}")?;
    writeln!(out, "{}", render::incident_card(&stored))?;
    Ok(stored)
}

/// Remove incident `id`
///
/// # Errors
/// Returns an error if the id is unknown or the removal could not be saved.
pub fn delete<S, C, W>(
    dashboard: &mut Dashboard<S, C>,
    id: IncidentId,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: KeyValueStorage,
    C: Clock,
    W: Write,
{
    let failed_before = dashboard.store().health().failed_writes;
    if !dashboard.delete(id) {
        bail!("no incident with id {id}");
    }
    ensure_saved(dashboard, failed_before)?;
    writeln!(out, "Deleted incident #{id}")?;
    Ok(())
}

/// Print the summary panels as of the store's clock
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn summary<S, C, W>(
    dashboard: &mut Dashboard<S, C>,
    filter: Option<SeverityFilter>,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: KeyValueStorage,
    C: Clock,
    W: Write,
{
    if let Some(filter) = filter {
        dashboard.set_filter(filter);
    }
    let summary = dashboard.summary_now();
    if json {
        serde_json::to_writer_pretty(&mut *out, &summary)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render::summary(&summary))?;
    }
    Ok(())
}

// A process exits after one command, so an unsaved change is a lost change.
fn ensure_saved<S, C>(dashboard: &Dashboard<S, C>, failed_before: u64) -> anyhow::Result<()>
where
    S: KeyValueStorage,
    C: Clock,
{
    let health = dashboard.store().health();
    if health.failed_writes > failed_before {
        bail!(
            "change was not saved: {}",
            health.last_error.as_deref().unwrap_or("unknown storage error")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use incident_model::Field;
    use incident_test_utils::{incident, store_with};
    use incident_view::ViewConfig;

    fn dashboard() -> Dashboard<incident_store::MemoryStorage, incident_store::FixedClock> {
        Dashboard::new(
            store_with(&[
                incident(1, Severity::Low, "2025-04-01T10:00:00Z"),
                incident(2, Severity::High, "2025-04-02T10:00:00Z"),
            ]),
            ViewConfig::default(),
        )
    }

    #[test]
    fn list_json_carries_controls() {
        let mut dashboard = dashboard();
        let mut out = Vec::new();
        let options = ListOptions {
            sort: Some(SortOrder::OldestFirst),
            json: true,
            ..ListOptions::default()
        };
        list(&mut dashboard, options, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["filter"], "All");
        assert_eq!(value["sort"], "Oldest First");
        assert_eq!(value["incidents"][0]["id"], 1);
    }

    #[test]
    fn blank_report_is_rejected_with_field_messages() {
        let mut dashboard = dashboard();
        let mut out = Vec::new();
        let err = report(
            &mut dashboard,
            IncidentDraft::new(" ", "", Severity::Low),
            false,
            &mut out,
        )
        .unwrap_err();

        let errors = err.downcast_ref::<incident_model::ValidationErrors>().unwrap();
        assert_eq!(errors.message(Field::Title), Some("Title is required"));
        assert_eq!(errors.message(Field::Description), Some("Description is required"));
        assert!(out.is_empty());
        assert_eq!(dashboard.store().len(), 2);
    }

    #[test]
    fn update_patches_only_given_fields() {
        let mut dashboard = dashboard();
        let mut out = Vec::new();
        let patch = IncidentPatch {
            severity: Some(Severity::Medium),
            ..IncidentPatch::default()
        };
        let updated = update(&mut dashboard, IncidentId(1), patch, &mut out).unwrap();

        assert_eq!(updated.severity, Severity::Medium);
        assert_eq!(updated.title, "Incident 1");
        assert!(String::from_utf8(out).unwrap().starts_with("Updated incident #1"));
    }

    #[test]
    fn update_cannot_blank_title() {
        let mut dashboard = dashboard();
        let patch = IncidentPatch {
            title: Some("   ".to_string()),
            ..IncidentPatch::default()
        };
        assert!(update(&mut dashboard, IncidentId(1), patch, &mut Vec::new()).is_err());
        assert_eq!(dashboard.store().get(IncidentId(1)).unwrap().title, "Incident 1");
    }

    #[test]
    fn unknown_ids_are_errors() {
        let mut dashboard = dashboard();
        let err = delete(&mut dashboard, IncidentId(9), &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "no incident with id 9");

        let patch = IncidentPatch {
            title: Some("x".to_string()),
            ..IncidentPatch::default()
        };
        assert!(update(&mut dashboard, IncidentId(9), patch, &mut Vec::new()).is_err());
    }

    struct ReadOnly;

    impl KeyValueStorage for ReadOnly {
        fn get(&self, _key: &str) -> Result<Option<String>, incident_store::StorageError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), incident_store::StorageError> {
            Err(incident_store::StorageError::Backend("disk full".to_string()))
        }
    }

    #[test]
    fn failed_save_is_reported() {
        let store = IncidentStore::new(ReadOnly, incident_store::StoreConfig::default());
        let mut dashboard = Dashboard::new(store, ViewConfig::default());
        dashboard.initialize();

        let err = delete(&mut dashboard, IncidentId(1), &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("disk full"));
        assert_eq!(dashboard.store().len(), 6);
    }
}

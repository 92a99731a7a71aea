//! Incident records and report drafts

use crate::severity::Severity;
use crate::validation::{Field, ValidationErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Incident identifier
///
/// Serialized as a bare number. Identifiers are assigned by the store,
/// one greater than the largest identifier already present.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct IncidentId(pub u64);

impl IncidentId {
    /// First identifier handed out for an empty collection
    pub const FIRST: IncidentId = IncidentId(1);

    /// Identifier following this one, `None` past `u64::MAX`
    #[inline]
    #[must_use]
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for IncidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for IncidentId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A recorded incident
///
/// Field names match the persisted JSON shape exactly:
/// `id`, `title`, `description`, `severity`, `reported_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    /// Unique identifier within the collection
    pub id: IncidentId,
    /// Short headline
    pub title: String,
    /// Free-form details
    pub description: String,
    /// Impact classification
    pub severity: Severity,
    /// When the incident was filed (set once, at creation)
    pub reported_at: DateTime<Utc>,
}

impl Incident {
    /// Build an incident from a draft with store-assigned fields
    #[must_use]
    pub fn from_draft(draft: IncidentDraft, id: IncidentId, reported_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            severity: draft.severity,
            reported_at,
        }
    }

    /// Calendar day (UTC) the incident was reported on
    #[inline]
    #[must_use]
    pub fn reported_on(&self) -> chrono::NaiveDate {
        self.reported_at.date_naive()
    }
}

/// An incident as submitted by a reporter, before the store assigns
/// `id` and `reported_at`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IncidentDraft {
    /// Short headline
    pub title: String,
    /// Free-form details
    pub description: String,
    /// Impact classification
    #[serde(default)]
    pub severity: Severity,
}

impl IncidentDraft {
    /// Create draft
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
        }
    }

    /// Check required fields
    ///
    /// Title and description must contain something other than whitespace.
    /// Text is not trimmed in the accepted draft.
    ///
    /// # Errors
    /// Returns every failing field at once so a form can flag them together.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.title.trim().is_empty() {
            errors.push(Field::Title, "Title is required");
        }
        if self.description.trim().is_empty() {
            errors.push(Field::Description, "Description is required");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn sample() -> Incident {
        Incident {
            id: IncidentId(4),
            title: "Autonomous Vehicle Decision Error".to_string(),
            description: "Incorrect priority decision".to_string(),
            severity: Severity::High,
            reported_at: Utc.with_ymd_and_hms(2025, 4, 5, 11, 45, 0).unwrap(),
        }
    }

    #[test]
    fn serialized_shape_matches_slot_format() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 4,
                "title": "Autonomous Vehicle Decision Error",
                "description": "Incorrect priority decision",
                "severity": "High",
                "reported_at": "2025-04-05T11:45:00Z",
            })
        );
    }

    #[test]
    fn accepts_millisecond_timestamps() {
        let json = r#"{"id":9,"title":"t","description":"d","severity":"Low","reported_at":"2025-04-05T11:45:00.000Z"}"#;
        let incident: Incident = serde_json::from_str(json).unwrap();
        assert_eq!(incident.id, IncidentId(9));
        assert_eq!(incident.reported_at, Utc.with_ymd_and_hms(2025, 4, 5, 11, 45, 0).unwrap());
    }

    #[test]
    fn from_draft_keeps_draft_fields() {
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let incident =
            Incident::from_draft(IncidentDraft::new("T", "D", Severity::Low), IncidentId(1), at);
        assert_eq!(incident.title, "T");
        assert_eq!(incident.description, "D");
        assert_eq!(incident.severity, Severity::Low);
        assert_eq!(incident.reported_at, at);
        assert_eq!(incident.reported_on().to_string(), "2025-01-02");
    }

    #[test]
    fn validate_accepts_filled_draft() {
        assert!(IncidentDraft::new("T", "D", Severity::Low).validate().is_ok());
    }

    #[test]
    fn validate_reports_each_blank_field() {
        let errors = IncidentDraft::new("  ", "", Severity::High)
            .validate()
            .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.message(Field::Title), Some("Title is required"));
        assert_eq!(errors.message(Field::Description), Some("Description is required"));
    }

    #[test]
    fn validate_reports_only_failing_field() {
        let errors = IncidentDraft::new("Leak", "\n\t", Severity::Low)
            .validate()
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.message(Field::Title).is_none());
    }

    #[test]
    fn draft_severity_defaults_to_medium() {
        let draft: IncidentDraft =
            serde_json::from_str(r#"{"title":"t","description":"d"}"#).unwrap();
        assert_eq!(draft.severity, Severity::Medium);
    }

    #[test]
    fn next_id_increments() {
        assert_eq!(IncidentId::FIRST.checked_next(), Some(IncidentId(2)));
        assert_eq!(IncidentId(u64::MAX).checked_next(), None);
    }
}

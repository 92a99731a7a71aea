//! Incident severity
//!
//! Ordinal classification of incident impact with the total order
//! `Low < Medium < High`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of an incident
///
/// The derived `Ord` follows declaration order, so `Low < Medium < High`.
/// Serialized as the exact strings `"Low"`, `"Medium"` and `"High"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Severity {
    /// Minor impact
    Low,
    /// Noticeable impact, the default for new reports
    #[default]
    Medium,
    /// Severe impact
    High,
}

impl Severity {
    /// All severities, lowest first
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    /// Numeric rank used for severity sorting (High=3, Medium=2, Low=1)
    #[inline]
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
        }
    }

    /// Canonical label
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when a label is not a known severity
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity: '{0}' (expected Low, Medium or High)")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_low_medium_high() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);

        let mut all = vec![Severity::High, Severity::Low, Severity::Medium];
        all.sort();
        assert_eq!(all, Severity::ALL.to_vec());
    }

    #[test]
    fn rank_matches_ordering() {
        assert_eq!(Severity::High.rank(), 3);
        assert_eq!(Severity::Medium.rank(), 2);
        assert_eq!(Severity::Low.rank(), 1);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("high".parse::<Severity>().unwrap(), Severity::High);
        assert_eq!(" Medium ".parse::<Severity>().unwrap(), Severity::Medium);
        assert_eq!("LOW".parse::<Severity>().unwrap(), Severity::Low);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "Critical".parse::<Severity>().unwrap_err();
        assert_eq!(err, ParseSeverityError("Critical".to_string()));
        assert!(err.to_string().contains("Critical"));
    }

    #[test]
    fn serializes_as_bare_label() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"High\"");
        let parsed: Severity = serde_json::from_str("\"Low\"").unwrap();
        assert_eq!(parsed, Severity::Low);
        assert!(serde_json::from_str::<Severity>("\"low\"").is_err());
    }

    #[test]
    fn default_is_medium() {
        assert_eq!(Severity::default(), Severity::Medium);
    }
}

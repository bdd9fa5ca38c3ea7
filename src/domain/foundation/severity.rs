//! ErrorSeverity enum for triaging application errors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Impact of an [`AppError`](super::AppError), ordered from least to most severe.
///
/// - `Info`: informational, not really an error
/// - `Warning`: non-fatal issue that should be addressed
/// - `Error`: prevents the operation from completing
/// - `Critical`: system-breaking, needs immediate attention
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    Info,
    Warning,
    #[default]
    Error,
    Critical,
}

impl ErrorSeverity {
    /// Returns the wire name of this severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorSeverity::Info => "info",
            ErrorSeverity::Warning => "warning",
            ErrorSeverity::Error => "error",
            ErrorSeverity::Critical => "critical",
        }
    }

    /// Returns true for severities that should page someone.
    pub fn is_alerting(&self) -> bool {
        matches!(self, ErrorSeverity::Critical)
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_error() {
        assert_eq!(ErrorSeverity::default(), ErrorSeverity::Error);
    }

    #[test]
    fn ordering_follows_impact() {
        assert!(ErrorSeverity::Info < ErrorSeverity::Warning);
        assert!(ErrorSeverity::Warning < ErrorSeverity::Error);
        assert!(ErrorSeverity::Error < ErrorSeverity::Critical);
    }

    #[test]
    fn only_critical_is_alerting() {
        assert!(ErrorSeverity::Critical.is_alerting());
        assert!(!ErrorSeverity::Error.is_alerting());
        assert!(!ErrorSeverity::Info.is_alerting());
    }

    #[test]
    fn serializes_to_lowercase_json() {
        assert_eq!(
            serde_json::to_string(&ErrorSeverity::Critical).unwrap(),
            "\"critical\""
        );
        let severity: ErrorSeverity = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(severity, ErrorSeverity::Warning);
    }

    #[test]
    fn rejects_unknown_severity() {
        assert!(serde_json::from_str::<ErrorSeverity>("\"fatal\"").is_err());
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(ErrorSeverity::Info.to_string(), "info");
        assert_eq!(ErrorSeverity::Error.to_string(), "error");
    }
}

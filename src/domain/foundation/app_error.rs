//! Structured application error shared across services.

use serde::{Deserialize, Serialize};
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt;

use super::{ErrorCode, ErrorSeverity, ValidationError};

/// Name reported in serialized error records.
pub const APP_ERROR_NAME: &str = "AppError";

/// Error carrying a machine-readable code and a severity.
///
/// The code is an opaque string so that services can report categories the
/// shared [`ErrorCode`] list does not know about. A stack trace is captured at
/// construction when `RUST_BACKTRACE` or `RUST_LIB_BACKTRACE` enables it.
///
/// # Example
///
/// ```
/// use xivdye_types::domain::foundation::{AppError, ErrorCode, ErrorSeverity};
///
/// let err = AppError::new(ErrorCode::DyeNotFound, "Dye with ID 999 not found");
/// assert_eq!(err.code(), "DYE_NOT_FOUND");
/// assert_eq!(err.severity(), ErrorSeverity::Error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ErrorRecord", from = "ErrorRecord")]
pub struct AppError {
    code: String,
    message: String,
    severity: ErrorSeverity,
    stack: Option<String>,
}

impl AppError {
    /// Creates a new error with the default `error` severity.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(code, message, ErrorSeverity::default())
    }

    /// Creates a new error with an explicit severity.
    pub fn with_severity(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: ErrorSeverity,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity,
            stack: capture_stack(),
        }
    }

    /// Creates an error from a known code.
    pub fn from_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(code, message)
    }

    /// Returns the error code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the code as a known [`ErrorCode`], if it is one.
    pub fn known_code(&self) -> Option<ErrorCode> {
        self.code.parse().ok()
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the severity.
    pub fn severity(&self) -> ErrorSeverity {
        self.severity
    }

    /// Returns the captured stack trace, if one was recorded.
    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    /// Converts the error into a plain record for logging and API responses.
    pub fn to_record(&self) -> ErrorRecord {
        ErrorRecord::from(self.clone())
    }

    /// Emits this error as a tracing event at a level matching its severity.
    pub fn log(&self) {
        match self.severity {
            ErrorSeverity::Critical | ErrorSeverity::Error => {
                tracing::error!(code = %self.code, severity = %self.severity, "{}", self.message)
            }
            ErrorSeverity::Warning => {
                tracing::warn!(code = %self.code, severity = %self.severity, "{}", self.message)
            }
            ErrorSeverity::Info => {
                tracing::info!(code = %self.code, severity = %self.severity, "{}", self.message)
            }
        }
    }
}

fn capture_stack() -> Option<String> {
    let trace = Backtrace::capture();
    match trace.status() {
        BacktraceStatus::Captured => Some(trace.to_string()),
        _ => None,
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for AppError {}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::new(err.code(), err.to_string())
    }
}

/// Serialized form of an [`AppError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub name: String,
    pub code: String,
    pub message: String,
    pub severity: ErrorSeverity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl From<AppError> for ErrorRecord {
    fn from(err: AppError) -> Self {
        Self {
            name: APP_ERROR_NAME.to_string(),
            code: err.code,
            message: err.message,
            severity: err.severity,
            stack: err.stack,
        }
    }
}

impl From<ErrorRecord> for AppError {
    fn from(record: ErrorRecord) -> Self {
        Self {
            code: record.code,
            message: record.message,
            severity: record.severity,
            stack: record.stack,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults_to_error_severity() {
        let err = AppError::new("DYE_NOT_FOUND", "Dye 999 not found");
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert_eq!(err.code(), "DYE_NOT_FOUND");
        assert_eq!(err.message(), "Dye 999 not found");
    }

    #[test]
    fn accepts_known_codes_and_arbitrary_strings() {
        let known = AppError::new(ErrorCode::InvalidTheme, "bad theme");
        assert_eq!(known.code(), "INVALID_THEME");
        assert_eq!(known.known_code(), Some(ErrorCode::InvalidTheme));

        let custom = AppError::new("PRESET_LOCKED", "locked");
        assert_eq!(custom.code(), "PRESET_LOCKED");
        assert_eq!(custom.known_code(), None);
    }

    #[test]
    fn from_code_round_trips_through_known_code() {
        let err = AppError::from_code(ErrorCode::StorageQuotaExceeded, "quota");
        assert_eq!(err.code(), "STORAGE_QUOTA_EXCEEDED");
        assert_eq!(err.known_code(), Some(ErrorCode::StorageQuotaExceeded));
    }

    #[test]
    fn with_severity_keeps_the_given_severity() {
        let err = AppError::with_severity("UNKNOWN_ERROR", "boom", ErrorSeverity::Critical);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn displays_code_and_message() {
        let err = AppError::new(ErrorCode::DyeNotFound, "Dye 999 not found");
        assert_eq!(format!("{}", err), "[DYE_NOT_FOUND] Dye 999 not found");
    }

    #[test]
    fn record_carries_name_code_message_and_severity() {
        let record = AppError::new("DYE_NOT_FOUND", "Dye 999 not found").to_record();
        assert_eq!(record.name, "AppError");
        assert_eq!(record.code, "DYE_NOT_FOUND");
        assert_eq!(record.message, "Dye 999 not found");
        assert_eq!(record.severity, ErrorSeverity::Error);
    }

    #[test]
    fn serializes_as_record_json() {
        let err = AppError::with_severity("API_CALL_FAILED", "upstream down", ErrorSeverity::Warning);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["name"], "AppError");
        assert_eq!(json["code"], "API_CALL_FAILED");
        assert_eq!(json["message"], "upstream down");
        assert_eq!(json["severity"], "warning");
    }

    #[test]
    fn deserializes_from_record_json() {
        let json = r#"{
            "name": "AppError",
            "code": "LOCALE_LOAD_FAILED",
            "message": "missing ja.json",
            "severity": "info",
            "stack": "at load_locale"
        }"#;
        let err: AppError = serde_json::from_str(json).unwrap();
        assert_eq!(err.code(), "LOCALE_LOAD_FAILED");
        assert_eq!(err.severity(), ErrorSeverity::Info);
        assert_eq!(err.stack(), Some("at load_locale"));
    }

    #[test]
    fn severity_defaults_are_not_applied_to_missing_record_fields() {
        let json = r#"{"name":"AppError","code":"X","message":"m"}"#;
        assert!(serde_json::from_str::<AppError>(json).is_err());
    }

    #[test]
    fn validation_errors_convert_with_matching_code() {
        let err: AppError = ValidationError::invalid_hex_color("#XYZ").into();
        assert_eq!(err.known_code(), Some(ErrorCode::InvalidHexColor));
        assert!(err.message().contains("#XYZ"));

        let err: AppError = ValidationError::empty_field("name").into();
        assert_eq!(err.known_code(), Some(ErrorCode::InvalidInput));
    }

    #[test]
    fn is_usable_as_a_boxed_std_error() {
        fn fails() -> Result<(), Box<dyn Error + Send + Sync>> {
            Err(AppError::new(ErrorCode::DatabaseLoadFailed, "no dyes"))?;
            Ok(())
        }

        let err = fails().unwrap_err();
        let app = err.downcast_ref::<AppError>().expect("downcast to AppError");
        assert_eq!(app.code(), "DATABASE_LOAD_FAILED");
    }

    #[test]
    fn log_does_not_panic_without_subscriber() {
        for severity in [
            ErrorSeverity::Info,
            ErrorSeverity::Warning,
            ErrorSeverity::Error,
            ErrorSeverity::Critical,
        ] {
            AppError::with_severity("UNKNOWN_ERROR", "logged", severity).log();
        }
    }
}

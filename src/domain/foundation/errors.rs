//! Error types for value construction and the shared error code vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid hex color format: {value}. Expected #RRGGBB or #RGB format.")]
    InvalidHexColor { value: String },

    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an invalid hex color error carrying the rejected input verbatim.
    pub fn invalid_hex_color(value: impl Into<String>) -> Self {
        ValidationError::InvalidHexColor {
            value: value.into(),
        }
    }

    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the error code this validation failure is reported under.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::InvalidHexColor { .. } => ErrorCode::InvalidHexColor,
            _ => ErrorCode::InvalidInput,
        }
    }
}

/// Known failure categories shared across the ecosystem.
///
/// The first block originates in the core color library, the second in the
/// web app. [`AppError`](super::AppError) keeps its code as an opaque string,
/// so services may still report codes outside this list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Core errors
    InvalidHexColor,
    InvalidRgbValue,
    DyeNotFound,
    DatabaseLoadFailed,
    InvalidInput,
    ApiCallFailed,
    LocaleLoadFailed,
    UnknownError,

    // Web app errors
    StorageQuotaExceeded,
    InvalidTheme,
    ImageLoadFailed,
}

impl ErrorCode {
    /// Returns every known code.
    pub fn all() -> &'static [ErrorCode] {
        &[
            ErrorCode::InvalidHexColor,
            ErrorCode::InvalidRgbValue,
            ErrorCode::DyeNotFound,
            ErrorCode::DatabaseLoadFailed,
            ErrorCode::InvalidInput,
            ErrorCode::ApiCallFailed,
            ErrorCode::LocaleLoadFailed,
            ErrorCode::UnknownError,
            ErrorCode::StorageQuotaExceeded,
            ErrorCode::InvalidTheme,
            ErrorCode::ImageLoadFailed,
        ]
    }

    /// Returns the wire representation of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidHexColor => "INVALID_HEX_COLOR",
            ErrorCode::InvalidRgbValue => "INVALID_RGB_VALUE",
            ErrorCode::DyeNotFound => "DYE_NOT_FOUND",
            ErrorCode::DatabaseLoadFailed => "DATABASE_LOAD_FAILED",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::ApiCallFailed => "API_CALL_FAILED",
            ErrorCode::LocaleLoadFailed => "LOCALE_LOAD_FAILED",
            ErrorCode::UnknownError => "UNKNOWN_ERROR",
            ErrorCode::StorageQuotaExceeded => "STORAGE_QUOTA_EXCEEDED",
            ErrorCode::InvalidTheme => "INVALID_THEME",
            ErrorCode::ImageLoadFailed => "IMAGE_LOAD_FAILED",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::all()
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_format("error_code", format!("unknown code '{}'", s)))
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        code.as_str().to_string()
    }
}

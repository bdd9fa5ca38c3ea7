//! Generic API response envelope.

use serde::de::{DeserializeOwned, Deserializer, Error as DeError};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::tagged::{read_flag, take_field};
use crate::domain::foundation::AppError;

/// Error payload shared by every `success: false` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    /// Creates an error body from a message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self::new(err.message())
    }
}

/// Consistent envelope for API responses.
///
/// On the wire this is `{ "success": bool, "data"?: T, "error"?: string,
/// "timestamp": ms }`; as a Rust value the payload is only reachable on the
/// success path.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success { data: T, timestamp: i64 },
    Failure { error: String, timestamp: i64 },
}

impl<T> ApiResponse<T> {
    /// Wraps a successful payload.
    pub fn success(data: T, timestamp: i64) -> Self {
        ApiResponse::Success { data, timestamp }
    }

    /// Wraps an error message.
    pub fn failure(error: impl Into<String>, timestamp: i64) -> Self {
        ApiResponse::Failure {
            error: error.into(),
            timestamp,
        }
    }

    /// Builds a response from an operation result, logging failures.
    pub fn from_result(result: Result<T, AppError>, timestamp: i64) -> Self {
        match result {
            Ok(data) => Self::success(data, timestamp),
            Err(err) => {
                err.log();
                Self::failure(err.message(), timestamp)
            }
        }
    }

    /// Returns true on success.
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }

    /// Returns the response timestamp (ms since epoch).
    pub fn timestamp(&self) -> i64 {
        match self {
            ApiResponse::Success { timestamp, .. } | ApiResponse::Failure { timestamp, .. } => {
                *timestamp
            }
        }
    }

    /// Returns the payload, if successful.
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResponse::Success { data, .. } => Some(data),
            ApiResponse::Failure { .. } => None,
        }
    }

    /// Converts into a `Result` of payload or error message.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            ApiResponse::Success { data, .. } => Ok(data),
            ApiResponse::Failure { error, .. } => Err(error),
        }
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ApiResponse", 3)?;
        match self {
            ApiResponse::Success { data, timestamp } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
                state.serialize_field("timestamp", timestamp)?;
            }
            ApiResponse::Failure { error, timestamp } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
                state.serialize_field("timestamp", timestamp)?;
            }
        }
        state.end()
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ApiResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = serde_json::Value::deserialize(deserializer)?;
        let success = read_flag::<D::Error>(&value, "success")?;
        let timestamp = take_field::<Option<i64>, D::Error>(&mut value, "timestamp")?
            .ok_or_else(|| D::Error::missing_field("timestamp"))?;
        if success {
            let data = take_field::<T, D::Error>(&mut value, "data")?;
            Ok(ApiResponse::Success { data, timestamp })
        } else {
            let error = take_field::<Option<String>, D::Error>(&mut value, "error")?
                .unwrap_or_default();
            Ok(ApiResponse::Failure { error, timestamp })
        }
    }
}

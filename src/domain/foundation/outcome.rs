//! OpResult: a serializable success-or-failure value.

use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::tagged::{read_flag, take_field};
use super::AppError;

/// Outcome of an operation that can fail with an expected error.
///
/// Unlike [`std::result::Result`], this type has a fixed JSON shape shared
/// with the ecosystem's other services:
///
/// ```json
/// { "ok": true, "value": ... }
/// { "ok": false, "error": { "code": ..., ... } }
/// ```
///
/// Convert with [`OpResult::into_result`] to use `?` inside Rust code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpResult<T, E = AppError> {
    Ok(T),
    Err(E),
}

impl<T, E> OpResult<T, E> {
    /// Returns true if this holds a success value.
    pub fn is_ok(&self) -> bool {
        matches!(self, OpResult::Ok(_))
    }

    /// Returns true if this holds an error.
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns the success value, if any.
    pub fn ok(self) -> Option<T> {
        match self {
            OpResult::Ok(value) => Some(value),
            OpResult::Err(_) => None,
        }
    }

    /// Returns the error, if any.
    pub fn err(self) -> Option<E> {
        match self {
            OpResult::Ok(_) => None,
            OpResult::Err(error) => Some(error),
        }
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for OpResult<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => OpResult::Ok(value),
            Err(error) => OpResult::Err(error),
        }
    }
}

impl<T, E> From<OpResult<T, E>> for Result<T, E> {
    fn from(outcome: OpResult<T, E>) -> Self {
        match outcome {
            OpResult::Ok(value) => Ok(value),
            OpResult::Err(error) => Err(error),
        }
    }
}

impl<T: Serialize, E: Serialize> Serialize for OpResult<T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("OpResult", 2)?;
        match self {
            OpResult::Ok(value) => {
                state.serialize_field("ok", &true)?;
                state.serialize_field("value", value)?;
            }
            OpResult::Err(error) => {
                state.serialize_field("ok", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

impl<'de, T: DeserializeOwned, E: DeserializeOwned> Deserialize<'de> for OpResult<T, E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = serde_json::Value::deserialize(deserializer)?;
        if read_flag::<D::Error>(&value, "ok")? {
            take_field::<T, D::Error>(&mut value, "value").map(OpResult::Ok)
        } else {
            take_field::<E, D::Error>(&mut value, "error").map(OpResult::Err)
        }
    }
}

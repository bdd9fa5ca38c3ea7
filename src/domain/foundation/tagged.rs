//! Wire helpers for sum types discriminated by a boolean JSON field.
//!
//! The ecosystem's JSON marks success/failure with `"success": true|false`
//! (or `"ok"` for [`OpResult`](super::OpResult)). Serde's enum tagging only
//! understands string tags, so these helpers read the flag from a buffered
//! [`serde_json::Value`] and then deserialize the matching variant payload.
//!
//! - **`impl_success_tagged!`** - Generates `Serialize`/`Deserialize` for a
//!   two-variant response enum whose variants wrap struct payloads.

use serde::de::{DeserializeOwned, Error as DeError};
use serde::Serialize;
use serde_json::Value;

/// Serializes `payload`'s fields alongside a boolean discriminator.
#[derive(Serialize)]
pub(crate) struct Flagged<'a, P> {
    #[serde(rename = "success")]
    pub flag: bool,
    #[serde(flatten)]
    pub payload: &'a P,
}

/// Reads a required boolean discriminator from a buffered JSON object.
pub(crate) fn read_flag<E: DeError>(value: &Value, name: &'static str) -> Result<bool, E> {
    match value.get(name) {
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(other) => Err(E::custom(format!(
            "field `{}` must be a boolean, got {}",
            name, other
        ))),
        None => Err(E::missing_field(name)),
    }
}

/// Moves a single field out of a buffered JSON object and deserializes it.
///
/// A missing field is read as `null`, so `Option` and unit payloads work.
pub(crate) fn take_field<T: DeserializeOwned, E: DeError>(
    value: &mut Value,
    name: &str,
) -> Result<T, E> {
    let field = value.get_mut(name).map(Value::take).unwrap_or(Value::Null);
    serde_json::from_value(field).map_err(E::custom)
}

/// Deserializes a whole buffered JSON object into a payload type.
pub(crate) fn from_buffered<T: DeserializeOwned, E: DeError>(value: Value) -> Result<T, E> {
    serde_json::from_value(value).map_err(E::custom)
}

/// Implements serde for `enum $name { $ok($ok_ty), $err($err_ty) }` using the
/// `success` boolean as discriminator and flattening the payload fields.
macro_rules! impl_success_tagged {
    ($name:ident, $ok:ident($ok_ty:ty), $err:ident($err_ty:ty)) => {
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                use $crate::domain::foundation::tagged::Flagged;
                match self {
                    $name::$ok(payload) => {
                        serde::Serialize::serialize(&Flagged { flag: true, payload }, serializer)
                    }
                    $name::$err(payload) => {
                        serde::Serialize::serialize(&Flagged { flag: false, payload }, serializer)
                    }
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                use $crate::domain::foundation::tagged::{from_buffered, read_flag};
                let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                if read_flag::<D::Error>(&value, "success")? {
                    from_buffered::<$ok_ty, D::Error>(value).map($name::$ok)
                } else {
                    from_buffered::<$err_ty, D::Error>(value).map($name::$err)
                }
            }
        }
    };
}

pub(crate) use impl_success_tagged;

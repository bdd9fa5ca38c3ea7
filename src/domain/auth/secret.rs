use secrecy::{ExposeSecret, SecretString};
use serde::Serializer;

/// Writes a secret in the clear. Only for records persisted server-side.
pub(crate) fn expose<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

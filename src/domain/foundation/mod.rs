//! Foundation module - Shared error vocabulary and result types.
//!
//! Contains the structured application error, its severity and code
//! enumerations, value-construction errors, and the serializable
//! [`OpResult`] used by every other domain module.

mod app_error;
mod errors;
mod outcome;
mod severity;
pub(crate) mod tagged;

pub use app_error::{AppError, ErrorRecord, APP_ERROR_NAME};
pub use errors::{ErrorCode, ValidationError};
pub use outcome::OpResult;
pub use severity::ErrorSeverity;

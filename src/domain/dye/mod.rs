//! Dye module - FFXIV dye records and the dye identifier.

mod database;
#[allow(clippy::module_inception)]
mod dye;
mod id;

pub use database::DyeDatabase;
pub use dye::{Dye, DyeWithDistance, LocalizedDye};
#[cfg(test)]
pub(crate) use dye::fixtures;
pub use id::{DyeId, DyeIdPolicy, MAX_CATALOG_DYE_ID, MAX_SYNTHETIC_DYE_ID, MIN_CATALOG_DYE_ID};

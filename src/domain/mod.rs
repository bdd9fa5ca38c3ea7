//! Domain layer containing the shared types of the XIV Dye Tools ecosystem.
//!
//! # Module Organization
//!
//! - `foundation` - Shared error vocabulary (AppError, codes, severity) and result types
//! - `color` - Branded color primitives (HexColor, Hue, Saturation) and colorblind matrices
//! - `dye` - Dye records, the dye identifier and the dye database
//! - `api` - Response envelopes, cache entries, moderation and price records
//! - `preset` - Curated and community preset palettes
//! - `auth` - OAuth providers, session claims and auth responses
//! - `character` - Character creator palettes, races and clans
//! - `localization` - Locale codes, translation files and locale resolution

pub mod api;
pub mod auth;
pub mod character;
pub mod color;
pub mod dye;
pub mod foundation;
pub mod localization;
pub mod preset;

//! XIV Dye Tools - Shared Types
//!
//! This crate defines the types shared by the XIV Dye Tools services: branded
//! color primitives that validate on construction, the structured application
//! error, and the serde shapes of dyes, presets, auth flows, character colors
//! and locale files.

pub mod config;
pub mod domain;
pub mod telemetry;

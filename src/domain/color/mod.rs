//! Color module - Branded color primitives and color records.
//!
//! Three normalization idioms coexist here and are kept distinct:
//!
//! - [`HexColor::new`] rejects malformed input with a `ValidationError`
//! - [`Hue::new`] wraps any angle into `[0, 360)`
//! - [`Saturation::new`] clamps any percentage into `[0, 100]`

mod colorblind;
mod hex;
mod hue;
mod rgb;
mod saturation;

pub use colorblind::{apply_matrix, ColorblindMatrices, Matrix3x3, VisionType};
pub use hex::HexColor;
pub use hue::Hue;
pub use rgb::{Hsv, Rgb};
pub use saturation::Saturation;

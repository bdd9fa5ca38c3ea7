//! RGB and HSV color records.

use serde::{Deserialize, Serialize};

use super::{HexColor, Hue, Saturation};

/// RGB color with 8-bit channels.
///
/// Channel values outside `0..=255` fail deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates an RGB triple.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the `#RRGGBB` form.
    pub fn to_hex(self) -> HexColor {
        HexColor::from_rgb(self)
    }
}

/// HSV color (hue, saturation, value).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue in degrees
    pub h: Hue,
    /// Saturation percent
    pub s: Saturation,
    /// Value/brightness percent (0-100)
    pub v: f64,
}

impl Hsv {
    /// Creates an HSV color, normalizing hue and clamping saturation.
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: Hue::new(h),
            s: Saturation::new(s),
            v,
        }
    }
}

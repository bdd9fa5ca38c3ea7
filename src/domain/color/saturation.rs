//! Saturation value object (0-100 percent).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Saturation percentage, always clamped into `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Saturation(f64);

impl Saturation {
    /// Fully desaturated.
    pub const MIN: Self = Self(0.0);

    /// Fully saturated.
    pub const MAX: Self = Self(100.0);

    /// Creates a Saturation, clamping to the valid range.
    ///
    /// NaN clamps to `0`.
    pub fn new(percent: f64) -> Self {
        if percent.is_nan() {
            return Self::MIN;
        }
        Self(percent.clamp(0.0, 100.0))
    }

    /// Returns the value as a percentage.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }
}

impl From<f64> for Saturation {
    fn from(percent: f64) -> Self {
        Self::new(percent)
    }
}

impl From<Saturation> for f64 {
    fn from(saturation: Saturation) -> Self {
        saturation.0
    }
}

impl fmt::Display for Saturation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

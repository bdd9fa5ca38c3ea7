//! Hue value object (degrees in `[0, 360)`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hue angle in degrees, always normalized into `[0, 360)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Hue(f64);

impl Hue {
    /// Degrees in a full turn.
    pub const FULL_TURN: f64 = 360.0;

    /// Creates a Hue, wrapping any angle into range.
    ///
    /// Negative angles wrap forward (`-30` becomes `330`), angles of a full
    /// turn or more wrap backward (`720` becomes `0`). Fractions are kept.
    /// Non-finite input has no meaningful angle and maps to `0`.
    pub fn new(degrees: f64) -> Self {
        if !degrees.is_finite() {
            return Self(0.0);
        }
        Self(((degrees % Self::FULL_TURN) + Self::FULL_TURN) % Self::FULL_TURN)
    }

    /// Returns the angle in degrees.
    pub fn degrees(&self) -> f64 {
        self.0
    }

    /// Rotates by `delta` degrees, wrapping the result.
    pub fn rotate(self, delta: f64) -> Self {
        Self::new(self.0 + delta)
    }

    /// Returns the hue on the opposite side of the color wheel.
    pub fn complement(self) -> Self {
        self.rotate(Self::FULL_TURN / 2.0)
    }
}

impl From<f64> for Hue {
    fn from(degrees: f64) -> Self {
        Self::new(degrees)
    }
}

impl From<Hue> for f64 {
    fn from(hue: Hue) -> Self {
        hue.0
    }
}

impl fmt::Display for Hue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

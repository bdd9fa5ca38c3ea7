//! Colorblindness simulation types.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Rgb;

/// Color vision types supported by the accessibility checker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisionType {
    /// Standard color vision
    #[default]
    Normal,
    /// Red-green, green cone deficiency
    Deuteranopia,
    /// Red-green, red cone deficiency
    Protanopia,
    /// Blue-yellow, blue cone deficiency
    Tritanopia,
    /// Complete colorblindness (monochromacy)
    Achromatopsia,
}

impl VisionType {
    /// Returns all vision types.
    pub fn all() -> &'static [VisionType] {
        &[
            VisionType::Normal,
            VisionType::Deuteranopia,
            VisionType::Protanopia,
            VisionType::Tritanopia,
            VisionType::Achromatopsia,
        ]
    }

    /// Returns the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            VisionType::Normal => "normal",
            VisionType::Deuteranopia => "deuteranopia",
            VisionType::Protanopia => "protanopia",
            VisionType::Tritanopia => "tritanopia",
            VisionType::Achromatopsia => "achromatopsia",
        }
    }
}

impl fmt::Display for VisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Row-major 3x3 RGB transformation matrix: `out[row] = matrix[row] · in`.
pub type Matrix3x3 = [[f64; 3]; 3];

/// Simulation matrices (Brettel 1997), one per deficiency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorblindMatrices {
    pub deuteranopia: Matrix3x3,
    pub protanopia: Matrix3x3,
    pub tritanopia: Matrix3x3,
    pub achromatopsia: Matrix3x3,
}

impl ColorblindMatrices {
    /// Returns the matrix for a vision type; normal vision needs none.
    pub fn matrix_for(&self, vision: VisionType) -> Option<&Matrix3x3> {
        match vision {
            VisionType::Normal => None,
            VisionType::Deuteranopia => Some(&self.deuteranopia),
            VisionType::Protanopia => Some(&self.protanopia),
            VisionType::Tritanopia => Some(&self.tritanopia),
            VisionType::Achromatopsia => Some(&self.achromatopsia),
        }
    }

    /// Simulates how `color` appears under `vision`.
    pub fn simulate(&self, vision: VisionType, color: Rgb) -> Rgb {
        match self.matrix_for(vision) {
            Some(matrix) => apply_matrix(matrix, color),
            None => color,
        }
    }
}

/// Multiplies an RGB triple by a matrix, rounding and clamping each channel.
pub fn apply_matrix(matrix: &Matrix3x3, color: Rgb) -> Rgb {
    let input = [f64::from(color.r), f64::from(color.g), f64::from(color.b)];
    let channel = |row: &[f64; 3]| {
        let sum: f64 = row.iter().zip(input.iter()).map(|(m, c)| m * c).sum();
        sum.round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(channel(&matrix[0]), channel(&matrix[1]), channel(&matrix[2]))
}

//! HexColor value object (validated `#RRGGBB`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Rgb;
use crate::domain::foundation::ValidationError;

/// Hexadecimal color, always stored as uppercase `#RRGGBB`.
///
/// Only constructible through validation, so any `HexColor` in hand is
/// known to be well-formed.
///
/// # Example
///
/// ```
/// use xivdye_types::domain::color::HexColor;
///
/// assert_eq!(HexColor::new("#f00").unwrap().as_str(), "#FF0000");
/// assert!(HexColor::new("invalid").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Validates `#RGB` or `#RRGGBB` input and normalizes it.
    ///
    /// Shorthand digits are doubled (`#abc` becomes `#AABBCC`). Whitespace,
    /// a missing `#`, any other length or non-hex characters are rejected
    /// with an error naming the offending input.
    pub fn new(hex: &str) -> Result<Self, ValidationError> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| matches!(d.len(), 3 | 6) && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| ValidationError::invalid_hex_color(hex))?;

        let mut normalized = String::with_capacity(7);
        normalized.push('#');
        for c in digits.chars().map(|c| c.to_ascii_uppercase()) {
            normalized.push(c);
            if digits.len() == 3 {
                normalized.push(c);
            }
        }
        Ok(Self(normalized))
    }

    /// Builds the hex form of an RGB triple.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self(format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b))
    }

    /// Returns the normalized `#RRGGBB` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the channels.
    pub fn to_rgb(&self) -> Rgb {
        let bytes = self.0.as_bytes();
        let channel = |i: usize| (nibble(bytes[i]) << 4) | nibble(bytes[i + 1]);
        Rgb::new(channel(1), channel(3), channel(5))
    }
}

// Input is one of the uppercase hex digits guaranteed by `new`.
fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HexColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<HexColor> for String {
    fn from(hex: HexColor) -> Self {
        hex.0
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

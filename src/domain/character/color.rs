//! Character customization palettes and their dye matches.

use serde::{Deserialize, Serialize};

use crate::domain::color::{HexColor, Hsv, Rgb};
use crate::domain::dye::Dye;

/// Swatch in a character creator palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterColor {
    /// Position in the palette grid (0-based, row-major)
    pub index: u16,
    pub hex: HexColor,
    pub rgb: Rgb,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsv: Option<Hsv>,
}

impl CharacterColor {
    /// Builds a swatch, deriving `rgb` from the hex value.
    pub fn new(index: u16, hex: HexColor) -> Self {
        Self {
            index,
            rgb: hex.to_rgb(),
            hex,
            hsv: None,
        }
    }

    /// Grid cell `(row, column)` of this swatch, if it lies inside `grid`.
    pub fn position(&self, grid: GridDimensions) -> Option<(u16, u16)> {
        let index = self.index;
        if index >= grid.cells() {
            return None;
        }
        Some((index / grid.columns, index % grid.columns))
    }
}

/// A character color paired with its closest dye.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterColorMatch {
    pub character_color: CharacterColor,
    pub dye: Dye,
    /// Color distance (lower is closer)
    pub distance: f64,
}

/// Palettes shared by every race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SharedColorCategory {
    EyeColors,
    HighlightColors,
    LipColorsDark,
    LipColorsLight,
    TattooColors,
    FacePaintColorsDark,
    FacePaintColorsLight,
}

/// Palettes that depend on clan and gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RaceSpecificColorCategory {
    HairColors,
    SkinColors,
}

/// Any character creator palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CharacterColorCategory {
    EyeColors,
    HighlightColors,
    LipColorsDark,
    LipColorsLight,
    TattooColors,
    FacePaintColorsDark,
    FacePaintColorsLight,
    HairColors,
    SkinColors,
}

/// Size of a palette grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    pub columns: u16,
    pub rows: u16,
}

impl GridDimensions {
    pub fn cells(&self) -> u16 {
        self.columns * self.rows
    }
}

impl CharacterColorCategory {
    pub fn all() -> &'static [CharacterColorCategory] {
        &[
            CharacterColorCategory::EyeColors,
            CharacterColorCategory::HighlightColors,
            CharacterColorCategory::LipColorsDark,
            CharacterColorCategory::LipColorsLight,
            CharacterColorCategory::TattooColors,
            CharacterColorCategory::FacePaintColorsDark,
            CharacterColorCategory::FacePaintColorsLight,
            CharacterColorCategory::HairColors,
            CharacterColorCategory::SkinColors,
        ]
    }

    /// Palette grid size. Every grid is 8 columns wide; lip colors have
    /// 12 rows, the rest 24.
    pub fn grid(&self) -> GridDimensions {
        let rows = match self {
            CharacterColorCategory::LipColorsDark | CharacterColorCategory::LipColorsLight => 12,
            _ => 24,
        };
        GridDimensions { columns: 8, rows }
    }

    /// Returns true if the palette depends on clan and gender.
    pub fn is_race_specific(&self) -> bool {
        matches!(
            self,
            CharacterColorCategory::HairColors | CharacterColorCategory::SkinColors
        )
    }
}

impl From<SharedColorCategory> for CharacterColorCategory {
    fn from(category: SharedColorCategory) -> Self {
        match category {
            SharedColorCategory::EyeColors => CharacterColorCategory::EyeColors,
            SharedColorCategory::HighlightColors => CharacterColorCategory::HighlightColors,
            SharedColorCategory::LipColorsDark => CharacterColorCategory::LipColorsDark,
            SharedColorCategory::LipColorsLight => CharacterColorCategory::LipColorsLight,
            SharedColorCategory::TattooColors => CharacterColorCategory::TattooColors,
            SharedColorCategory::FacePaintColorsDark => CharacterColorCategory::FacePaintColorsDark,
            SharedColorCategory::FacePaintColorsLight => {
                CharacterColorCategory::FacePaintColorsLight
            }
        }
    }
}

impl From<RaceSpecificColorCategory> for CharacterColorCategory {
    fn from(category: RaceSpecificColorCategory) -> Self {
        match category {
            RaceSpecificColorCategory::HairColors => CharacterColorCategory::HairColors,
            RaceSpecificColorCategory::SkinColors => CharacterColorCategory::SkinColors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dye::fixtures::dye;
    use serde_json::json;

    #[test]
    fn lip_palettes_are_half_height() {
        for category in CharacterColorCategory::all() {
            let grid = category.grid();
            assert_eq!(grid.columns, 8);
            let expected = match category {
                CharacterColorCategory::LipColorsDark | CharacterColorCategory::LipColorsLight => 12,
                _ => 24,
            };
            assert_eq!(grid.rows, expected, "{:?}", category);
        }
        assert_eq!(CharacterColorCategory::EyeColors.grid().cells(), 192);
    }

    #[test]
    fn only_hair_and_skin_are_race_specific() {
        let specific: Vec<_> = CharacterColorCategory::all()
            .iter()
            .filter(|c| c.is_race_specific())
            .collect();
        assert_eq!(
            specific,
            vec![&CharacterColorCategory::HairColors, &CharacterColorCategory::SkinColors]
        );
        assert!(CharacterColorCategory::from(RaceSpecificColorCategory::SkinColors).is_race_specific());
        assert!(!CharacterColorCategory::from(SharedColorCategory::TattooColors).is_race_specific());
    }

    #[test]
    fn categories_serialize_camel_case() {
        assert_eq!(
            serde_json::to_value(CharacterColorCategory::FacePaintColorsLight).unwrap(),
            json!("facePaintColorsLight")
        );
        assert_eq!(
            serde_json::to_value(SharedColorCategory::LipColorsDark).unwrap(),
            json!("lipColorsDark")
        );
    }

    #[test]
    fn swatch_position_is_row_major() {
        let grid = CharacterColorCategory::LipColorsDark.grid();
        let swatch = CharacterColor::new(17, HexColor::new("#aa3344").unwrap());
        assert_eq!(swatch.rgb, Rgb::new(170, 51, 68));
        assert_eq!(swatch.position(grid), Some((2, 1)));
        assert_eq!(CharacterColor::new(96, swatch.hex.clone()).position(grid), None);
    }

    #[test]
    fn match_serializes_camel_case() {
        let matched = CharacterColorMatch {
            character_color: CharacterColor::new(0, HexColor::new("#fff").unwrap()),
            dye: dye(1, "Snow White", "#E4DFD0"),
            distance: 3.5,
        };
        let json = serde_json::to_value(&matched).unwrap();
        assert_eq!(json["characterColor"]["hex"], "#FFFFFF");
        assert!(json["characterColor"].get("hsv").is_none());
        assert_eq!(json["dye"]["itemID"], 5701);
    }
}

//! FFXIV dye records.
//!
//! Every field of [`Dye`] is required; the dye database guarantees complete
//! data. JSON from outside sources is validated by deserialization: the hex
//! must be well-formed and RGB channels must fit in a byte.

use serde::{Deserialize, Serialize};

use super::{DyeId, DyeIdPolicy};
use crate::domain::color::{HexColor, Hsv, Rgb};

/// A single dye item with its color and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dye {
    /// FFXIV item ID
    #[serde(rename = "itemID")]
    pub item_id: i32,

    /// Game's internal stain table ID (1-125).
    ///
    /// Used by plugins such as Glamourer. Unlike `item_id` it may shift when
    /// new dyes are added, so prefer `item_id` for stable references.
    /// Facewear dyes have no stain ID.
    #[serde(rename = "stainID")]
    pub stain_id: Option<i32>,

    /// Dye ID (1-200, or synthetic for facewear)
    pub id: i32,

    /// English dye name
    pub name: String,

    pub hex: HexColor,
    pub rgb: Rgb,
    pub hsv: Hsv,

    /// Category name (e.g. "Neutral", "Red")
    pub category: String,

    /// How to obtain the dye (e.g. "NPC", "Crafted")
    pub acquisition: String,

    /// Gil cost (0 if not purchasable)
    pub cost: u32,

    // Locale-independent type flags
    pub is_metallic: bool,
    pub is_pastel: bool,
    pub is_dark: bool,
    pub is_cosmic: bool,
}

impl Dye {
    /// Returns the dye's ID if it is valid under `policy`.
    pub fn dye_id(&self, policy: DyeIdPolicy) -> Option<DyeId> {
        DyeId::from_int_with_policy(i64::from(self.id), policy)
    }

    /// Returns true if the dye can be bought from a vendor.
    pub fn is_purchasable(&self) -> bool {
        self.cost > 0
    }

    /// Returns true for facewear dyes, which have no stain table entry.
    pub fn is_facewear(&self) -> bool {
        self.stain_id.is_none()
    }
}

/// Dye with an optional translated name for non-English locales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedDye {
    #[serde(flatten)]
    pub dye: Dye,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_name: Option<String>,
}

impl LocalizedDye {
    /// Returns the translated name, falling back to the English name.
    pub fn display_name(&self) -> &str {
        self.localized_name.as_deref().unwrap_or(&self.dye.name)
    }
}

/// Dye paired with its color distance from a search target (lower is closer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DyeWithDistance {
    #[serde(flatten)]
    pub dye: Dye,

    pub distance: f64,
}

//! Curated preset palettes and their categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::dye::{Dye, DyeDatabase};

/// Preset category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetCategory {
    Jobs,
    GrandCompanies,
    Seasons,
    Events,
    Aesthetics,
    Community,
}

impl PresetCategory {
    pub fn all() -> &'static [PresetCategory] {
        &[
            PresetCategory::Jobs,
            PresetCategory::GrandCompanies,
            PresetCategory::Seasons,
            PresetCategory::Events,
            PresetCategory::Aesthetics,
            PresetCategory::Community,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PresetCategory::Jobs => "jobs",
            PresetCategory::GrandCompanies => "grand-companies",
            PresetCategory::Seasons => "seasons",
            PresetCategory::Events => "events",
            PresetCategory::Aesthetics => "aesthetics",
            PresetCategory::Community => "community",
        }
    }
}

impl fmt::Display for PresetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Moderation status of a community preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Flagged,
    Hidden,
}

impl PresetStatus {
    /// Returns true if the preset is shown in public listings.
    pub fn is_public(&self) -> bool {
        matches!(self, PresetStatus::Approved)
    }
}

/// Sort order for preset listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetSortOption {
    #[default]
    Popular,
    Recent,
    Name,
}

/// Category metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMeta {
    /// Category ID (present in API responses)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,
    pub description: String,

    /// Emoji or icon identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_curated: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset_count: Option<u32>,
}

/// A curated palette. `dyes` holds FFXIV item IDs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetPalette {
    pub id: String,
    pub name: String,
    pub category: PresetCategory,
    pub description: String,
    pub dyes: Vec<i32>,
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Palette with its dye item IDs resolved against a dye database.
///
/// `resolved_dyes` lines up index for index with `palette.dyes`; an item ID
/// missing from the database resolves to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPreset {
    #[serde(flatten)]
    pub palette: PresetPalette,

    #[serde(rename = "resolvedDyes")]
    pub resolved_dyes: Vec<Option<Dye>>,
}

impl ResolvedPreset {
    pub fn resolve(palette: PresetPalette, database: &DyeDatabase) -> Self {
        let resolved_dyes = palette
            .dyes
            .iter()
            .map(|item_id| database.find_by_item_id(*item_id).cloned())
            .collect();
        Self {
            palette,
            resolved_dyes,
        }
    }

    /// Returns true if every dye was found.
    pub fn is_complete(&self) -> bool {
        self.resolved_dyes.iter().all(Option::is_some)
    }

    pub fn missing_item_ids(&self) -> Vec<i32> {
        self.palette
            .dyes
            .iter()
            .zip(&self.resolved_dyes)
            .filter(|(_, dye)| dye.is_none())
            .map(|(item_id, _)| *item_id)
            .collect()
    }
}

/// Curated preset data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetData {
    pub version: String,
    pub last_updated: DateTime<Utc>,
    pub categories: BTreeMap<PresetCategory, CategoryMeta>,
    pub palettes: Vec<PresetPalette>,
}

impl PresetData {
    /// Palettes in `category`, in file order.
    pub fn palettes_in(&self, category: PresetCategory) -> impl Iterator<Item = &PresetPalette> {
        self.palettes
            .iter()
            .filter(move |palette| palette.category == category)
    }

    pub fn find_palette(&self, id: &str) -> Option<&PresetPalette> {
        self.palettes.iter().find(|palette| palette.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dye::fixtures::dye;
    use serde_json::json;

    fn palette(dyes: Vec<i32>) -> PresetPalette {
        PresetPalette {
            id: "paladin".to_string(),
            name: "Paladin".to_string(),
            category: PresetCategory::Jobs,
            description: "Holy knight colors".to_string(),
            dyes,
            tags: vec!["tank".to_string()],
            author: None,
            version: None,
        }
    }

    #[test]
    fn category_uses_kebab_case() {
        assert_eq!(
            serde_json::to_value(PresetCategory::GrandCompanies).unwrap(),
            json!("grand-companies")
        );
        for category in PresetCategory::all() {
            assert_eq!(serde_json::to_value(category).unwrap(), json!(category.as_str()));
        }
    }

    #[test]
    fn only_approved_presets_are_public() {
        assert!(PresetStatus::Approved.is_public());
        assert!(!PresetStatus::Pending.is_public());
        assert!(!PresetStatus::Hidden.is_public());
    }

    #[test]
    fn category_meta_icon_may_be_null() {
        let meta: CategoryMeta = serde_json::from_value(json!({
            "name": "Jobs",
            "description": "Job themed palettes",
            "icon": null
        }))
        .unwrap();
        assert_eq!(meta.icon, None);
        assert_eq!(meta.display_order, None);
    }

    #[test]
    fn resolve_keeps_positions_of_missing_dyes() {
        let database = DyeDatabase::loaded(
            vec![dye(1, "Snow White", "#E4DFD0"), dye(3, "Rose Pink", "#E8B0B8")],
            0,
        );
        let resolved = ResolvedPreset::resolve(palette(vec![5701, 9999, 5703]), &database);

        assert_eq!(resolved.resolved_dyes.len(), 3);
        assert!(resolved.resolved_dyes[1].is_none());
        assert_eq!(
            resolved.resolved_dyes[2].as_ref().map(|d| d.name.as_str()),
            Some("Rose Pink")
        );
        assert!(!resolved.is_complete());
        assert_eq!(resolved.missing_item_ids(), vec![9999]);
    }

    #[test]
    fn resolved_preset_serializes_flat_with_null_gaps() {
        let resolved = ResolvedPreset::resolve(palette(vec![1]), &DyeDatabase::default());
        let json = serde_json::to_value(&resolved).unwrap();
        assert_eq!(json["id"], "paladin");
        assert_eq!(json["resolvedDyes"], json!([null]));
    }

    #[test]
    fn preset_data_groups_palettes_by_category() {
        let data: PresetData = serde_json::from_value(json!({
            "version": "1.2.0",
            "lastUpdated": "2025-01-01T00:00:00Z",
            "categories": {
                "jobs": { "name": "Jobs", "description": "Job palettes" },
                "seasons": { "name": "Seasons", "description": "Seasonal palettes" }
            },
            "palettes": [
                { "id": "pld", "name": "Paladin", "category": "jobs",
                  "description": "d", "dyes": [5729, 5730], "tags": [] },
                { "id": "winter", "name": "Winter", "category": "seasons",
                  "description": "d", "dyes": [5729, 5731], "tags": ["cold"] }
            ]
        }))
        .unwrap();

        assert!(data.categories.contains_key(&PresetCategory::Seasons));
        let jobs: Vec<_> = data.palettes_in(PresetCategory::Jobs).map(|p| p.id.as_str()).collect();
        assert_eq!(jobs, vec!["pld"]);
        assert_eq!(data.find_palette("winter").map(|p| p.tags.len()), Some(1));
        assert!(data.find_palette("missing").is_none());
    }
}

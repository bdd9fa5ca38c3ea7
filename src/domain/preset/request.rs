//! Preset listing filters and edit requests.

use serde::{Deserialize, Serialize};

use super::validation::{validate_description, validate_dyes, validate_name, validate_tags};
use super::{PresetCategory, PresetSortOption, PresetStatus};
use crate::domain::foundation::ValidationError;

/// Page size used when a request does not specify one.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Largest page size a listing returns.
pub const MAX_PAGE_LIMIT: u32 = 50;

/// Query filters for listing community presets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<PresetCategory>,

    /// Free-text search over name, description and tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PresetStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<PresetSortOption>,

    /// 1-indexed page number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_curated: Option<bool>,
}

impl PresetFilters {
    /// Page to fetch; missing or zero means the first page.
    pub fn effective_page(&self) -> u32 {
        self.page.filter(|page| *page > 0).unwrap_or(1)
    }

    /// Page size, defaulting to 20 and capped at 50.
    pub fn effective_limit(&self) -> u32 {
        self.limit
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .min(MAX_PAGE_LIMIT)
    }

    /// Number of presets skipped before the effective page.
    pub fn offset(&self) -> u64 {
        u64::from(self.effective_page() - 1) * u64::from(self.effective_limit())
    }

    /// Sort order, defaulting to most popular.
    pub fn effective_sort(&self) -> PresetSortOption {
        self.sort.unwrap_or_default()
    }

    /// Search text with surrounding whitespace removed; blank means no search.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

/// Partial update of a community preset. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetEditRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dyes: Option<Vec<i32>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl PresetEditRequest {
    /// Returns true if the request changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.dyes.is_none() && self.tags.is_none()
    }

    /// Checks each present field against the submission limits.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        if let Some(dyes) = &self.dyes {
            validate_dyes(dyes)?;
        }
        if let Some(tags) = &self.tags {
            validate_tags(tags)?;
        }
        Ok(())
    }

    /// Returns true if applying the request changes the dye set.
    pub fn changes_dyes(&self) -> bool {
        self.dyes.is_some()
    }
}

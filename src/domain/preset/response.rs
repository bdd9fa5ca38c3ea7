//! Presets API responses.
//!
//! Responses that can fail are enums; on the wire they carry a `success`
//! boolean with the variant's fields flattened beside it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CategoryMeta, CommunityPreset, PresetFilters};
use crate::domain::api::ErrorBody;
use crate::domain::foundation::tagged::impl_success_tagged;

/// One page of community presets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetListResponse {
    pub presets: Vec<CommunityPreset>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub has_more: bool,
}

impl PresetListResponse {
    /// Builds a page for `filters`, deriving `has_more` from the total.
    pub fn page(presets: Vec<CommunityPreset>, total: u64, filters: &PresetFilters) -> Self {
        let page = filters.effective_page();
        let limit = filters.effective_limit();
        Self {
            has_more: filters.offset() + (presets.len() as u64) < total,
            presets,
            total,
            page,
            limit,
        }
    }
}

/// Moderation state a created or edited preset ends up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationOutcome {
    Approved,
    Pending,
}

/// Successful submission: either a new preset or a vote on an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PresetSubmitted {
    /// Newly created preset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<CommunityPreset>,

    /// Existing preset with the same dye signature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicate: Option<CommunityPreset>,

    /// Whether the submitter's vote was added to the duplicate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_added: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderation_status: Option<ModerationOutcome>,
}

impl PresetSubmitted {
    pub fn created(preset: CommunityPreset, moderation_status: ModerationOutcome) -> Self {
        Self {
            preset: Some(preset),
            moderation_status: Some(moderation_status),
            ..Default::default()
        }
    }

    pub fn duplicate(existing: CommunityPreset, vote_added: bool) -> Self {
        Self {
            duplicate: Some(existing),
            vote_added: Some(vote_added),
            ..Default::default()
        }
    }

    pub fn is_duplicate(&self) -> bool {
        self.duplicate.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetSubmitResponse {
    Success(PresetSubmitted),
    Error(ErrorBody),
}

impl_success_tagged!(PresetSubmitResponse, Success(PresetSubmitted), Error(ErrorBody));

/// Existing preset an edit would collide with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetEditDuplicateInfo {
    pub id: Uuid,
    pub name: String,
    pub author_name: Option<String>,
}

impl From<&CommunityPreset> for PresetEditDuplicateInfo {
    fn from(preset: &CommunityPreset) -> Self {
        Self {
            id: preset.id,
            name: preset.name.clone(),
            author_name: preset.author_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetEdited {
    pub preset: CommunityPreset,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderation_status: Option<ModerationOutcome>,
}

/// Rejected edit, with the colliding preset when the dye set is taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetEditFailure {
    pub error: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicate: Option<PresetEditDuplicateInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetEditResponse {
    Success(PresetEdited),
    Error(PresetEditFailure),
}

impl_success_tagged!(PresetEditResponse, Success(PresetEdited), Error(PresetEditFailure));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecorded {
    pub new_vote_count: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub already_voted: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteFailure {
    pub error: String,

    #[serde(default)]
    pub already_voted: bool,

    /// Current count, when the preset exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_vote_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteResponse {
    Success(VoteRecorded),
    Error(VoteFailure),
}

impl_success_tagged!(VoteResponse, Success(VoteRecorded), Error(VoteFailure));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationApplied {
    pub preset: CommunityPreset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModerationResponse {
    Success(ModerationApplied),
    Error(ErrorBody),
}

impl_success_tagged!(ModerationResponse, Success(ModerationApplied), Error(ErrorBody));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryMeta>,
}

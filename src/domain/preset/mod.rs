//! Preset module - Curated and community dye palettes.
//!
//! Curated palettes ship in a versioned data file ([`PresetData`]); community
//! presets are submitted by users, moderated, voted on and edited through the
//! presets API. Submissions and edits are checked against the limits in
//! [`validation`] before they reach storage.

mod community;
mod palette;
mod request;
mod response;
pub mod validation;

pub use community::{
    dye_signature, AuthenticatedPresetSubmission, CommunityPreset, PresetPreviousValues,
    PresetSubmission,
};
pub use palette::{
    CategoryMeta, PresetCategory, PresetData, PresetPalette, PresetSortOption, PresetStatus,
    ResolvedPreset,
};
pub use request::{PresetEditRequest, PresetFilters, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
pub use response::{
    CategoryListResponse, ModerationApplied, ModerationOutcome, ModerationResponse,
    PresetEditDuplicateInfo, PresetEditFailure, PresetEditResponse, PresetEdited,
    PresetListResponse, PresetSubmitResponse, PresetSubmitted, VoteFailure, VoteRecorded,
    VoteResponse,
};

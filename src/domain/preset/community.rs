//! User-submitted community presets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{validate_description, validate_dyes, validate_name, validate_tags};
use super::{PresetCategory, PresetEditRequest, PresetStatus};
use crate::domain::foundation::ValidationError;

/// Duplicate-detection key for a dye set: item IDs sorted ascending and
/// joined with commas, e.g. `"1,5,12,45"`.
pub fn dye_signature(dyes: &[i32]) -> String {
    let mut sorted = dyes.to_vec();
    sorted.sort_unstable();
    sorted
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Editable fields as they were before the last edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetPreviousValues {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub dyes: Vec<i32>,
}

/// A community preset as stored and served by the presets API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityPreset {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category_id: PresetCategory,
    pub dyes: Vec<i32>,
    pub tags: Vec<String>,

    /// Null for curated presets
    pub author_discord_id: Option<String>,
    pub author_name: Option<String>,

    pub vote_count: u32,
    pub status: PresetStatus,
    pub is_curated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dye_signature: Option<String>,

    /// Set once the preset has been edited, for moderator reverts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_values: Option<PresetPreviousValues>,
}

impl CommunityPreset {
    /// Creates a pending preset from an authenticated submission.
    pub fn from_submission(submission: AuthenticatedPresetSubmission, now: DateTime<Utc>) -> Self {
        let AuthenticatedPresetSubmission {
            submission,
            author_discord_id,
            author_name,
        } = submission;
        Self {
            id: Uuid::new_v4(),
            dye_signature: Some(dye_signature(&submission.dyes)),
            name: submission.name,
            description: submission.description,
            category_id: submission.category_id,
            dyes: submission.dyes,
            tags: submission.tags,
            author_discord_id: Some(author_discord_id),
            author_name: Some(author_name),
            vote_count: 0,
            status: PresetStatus::Pending,
            is_curated: false,
            created_at: now,
            updated_at: now,
            previous_values: None,
        }
    }

    /// Returns true if `discord_id` submitted this preset.
    pub fn is_authored_by(&self, discord_id: &str) -> bool {
        self.author_discord_id.as_deref() == Some(discord_id)
    }

    /// Snapshot of the editable fields.
    pub fn current_values(&self) -> PresetPreviousValues {
        PresetPreviousValues {
            name: self.name.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
            dyes: self.dyes.clone(),
        }
    }

    /// Applies a validated edit, keeping the prior values for revert.
    pub fn apply_edit(
        &mut self,
        edit: &PresetEditRequest,
        now: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        edit.validate()?;
        if edit.is_empty() {
            return Ok(());
        }

        self.previous_values = Some(self.current_values());
        if let Some(name) = &edit.name {
            self.name = name.clone();
        }
        if let Some(description) = &edit.description {
            self.description = description.clone();
        }
        if let Some(tags) = &edit.tags {
            self.tags = tags.clone();
        }
        if let Some(dyes) = &edit.dyes {
            self.dyes = dyes.clone();
            self.dye_signature = Some(dye_signature(dyes));
        }
        self.updated_at = now;
        Ok(())
    }

    /// Restores the values from before the last edit.
    ///
    /// Returns false if the preset has never been edited.
    pub fn revert(&mut self, now: DateTime<Utc>) -> bool {
        let Some(previous) = self.previous_values.take() else {
            return false;
        };
        self.dye_signature = Some(dye_signature(&previous.dyes));
        self.name = previous.name;
        self.description = previous.description;
        self.tags = previous.tags;
        self.dyes = previous.dyes;
        self.updated_at = now;
        true
    }
}

/// New preset as submitted by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetSubmission {
    pub name: String,
    pub description: String,
    pub category_id: PresetCategory,

    /// 2-5 dye item IDs
    pub dyes: Vec<i32>,

    /// Up to 10 tags of at most 30 characters
    pub tags: Vec<String>,
}

impl PresetSubmission {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_description(&self.description)?;
        validate_dyes(&self.dyes)?;
        validate_tags(&self.tags)
    }

    pub fn dye_signature(&self) -> String {
        dye_signature(&self.dyes)
    }
}

/// Submission with the submitter's identity attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedPresetSubmission {
    #[serde(flatten)]
    pub submission: PresetSubmission,

    pub author_discord_id: String,
    pub author_name: String,
}

impl AuthenticatedPresetSubmission {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.author_discord_id.trim().is_empty() {
            return Err(ValidationError::empty_field("author_discord_id"));
        }
        self.submission.validate()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{created_at, preset, submission};
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    #[test]
    fn signature_sorts_numerically() {
        assert_eq!(dye_signature(&[45, 1, 12, 5]), "1,5,12,45");
        assert_eq!(dye_signature(&[]), "");
    }

    #[test]
    fn signature_ignores_submission_order() {
        assert_eq!(dye_signature(&[3, 1, 2]), dye_signature(&[2, 3, 1]));
    }

    #[test]
    fn submission_validation_reports_first_failing_field() {
        let mut s = submission().submission;
        assert!(s.validate().is_ok());

        s.description = "short".to_string();
        assert_eq!(
            s.validate(),
            Err(ValidationError::out_of_range("description", 10, 200, 5))
        );
    }

    #[test]
    fn authenticated_submission_requires_author() {
        let mut s = submission();
        assert!(s.validate().is_ok());
        s.author_discord_id = String::new();
        assert_eq!(
            s.validate(),
            Err(ValidationError::empty_field("author_discord_id"))
        );
    }

    #[test]
    fn authenticated_submission_flattens_on_the_wire() {
        let json = serde_json::to_value(submission()).unwrap();
        assert_eq!(json["name"], "Crimson Knight");
        assert_eq!(json["category_id"], "jobs");
        assert_eq!(json["author_name"], "Warrior of Light");
        assert!(json.get("submission").is_none());
    }

    #[test]
    fn from_submission_starts_pending_with_signature() {
        let preset = preset();
        assert_eq!(preset.status, PresetStatus::Pending);
        assert_eq!(preset.vote_count, 0);
        assert_eq!(preset.dye_signature.as_deref(), Some("5729,5742,5771"));
        assert!(preset.is_authored_by("123456789012345678"));
        assert!(!preset.is_authored_by("1"));
        assert_eq!(preset.created_at, preset.updated_at);
    }

    #[test]
    fn edit_then_revert_restores_previous_values() {
        let mut preset = preset();
        let later = created_at() + Duration::hours(1);
        let edit = PresetEditRequest {
            name: Some("Azure Knight".to_string()),
            dyes: Some(vec![5740, 5729]),
            ..Default::default()
        };

        preset.apply_edit(&edit, later).unwrap();
        assert_eq!(preset.name, "Azure Knight");
        assert_eq!(preset.dye_signature.as_deref(), Some("5729,5740"));
        assert_eq!(preset.updated_at, later);
        assert_eq!(
            preset.previous_values.as_ref().map(|p| p.name.as_str()),
            Some("Crimson Knight")
        );

        assert!(preset.revert(later + Duration::hours(1)));
        assert_eq!(preset.name, "Crimson Knight");
        assert_eq!(preset.dyes, vec![5742, 5729, 5771]);
        assert_eq!(preset.dye_signature.as_deref(), Some("5729,5742,5771"));
        assert!(preset.previous_values.is_none());
        assert!(!preset.revert(later));
    }

    #[test]
    fn invalid_edit_leaves_preset_untouched() {
        let mut preset = preset();
        let before = preset.clone();
        let edit = PresetEditRequest {
            tags: Some(vec!["x".repeat(31)]),
            ..Default::default()
        };
        assert!(preset.apply_edit(&edit, created_at()).is_err());
        assert_eq!(preset, before);
    }

    #[test]
    fn parses_api_json_with_nulls() {
        let preset: CommunityPreset = serde_json::from_value(json!({
            "id": "0b9f0c3e-2d7a-4e55-9a3c-7e1f4b2d8c61",
            "name": "Ishgard Winter",
            "description": "Cold whites and blues",
            "category_id": "seasons",
            "dyes": [5729, 5740],
            "tags": [],
            "author_discord_id": null,
            "author_name": null,
            "vote_count": 12,
            "status": "approved",
            "is_curated": true,
            "created_at": "2024-12-01T00:00:00Z",
            "updated_at": "2024-12-02T00:00:00.000Z",
            "previous_values": null
        }))
        .unwrap();
        assert!(preset.is_curated);
        assert_eq!(preset.author_name, None);
        assert_eq!(preset.previous_values, None);
        assert_eq!(preset.dye_signature, None);
    }
}

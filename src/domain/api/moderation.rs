//! Content moderation records for preset submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Field that tripped a moderation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlaggedField {
    Name,
    Description,
    Content,
}

/// Which checks produced a moderation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationMethod {
    /// Local word lists only
    Local,
    /// Perspective API only
    Perspective,
    All,
}

/// Outcome of a content moderation check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationResult {
    pub passed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flagged_field: Option<FlaggedField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flagged_reason: Option<String>,

    pub method: ModerationMethod,

    /// Toxicity scores by category (Perspective API only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<BTreeMap<String, f64>>,
}

impl ModerationResult {
    /// A passing result for the given method.
    pub fn passed(method: ModerationMethod) -> Self {
        Self {
            passed: true,
            flagged_field: None,
            flagged_reason: None,
            method,
            scores: None,
        }
    }

    /// A failing result naming the offending field.
    pub fn flagged(method: ModerationMethod, field: FlaggedField, reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            flagged_field: Some(field),
            flagged_reason: Some(reason.into()),
            method,
            scores: None,
        }
    }

    /// Attaches per-category scores.
    pub fn with_scores(mut self, scores: BTreeMap<String, f64>) -> Self {
        self.scores = Some(scores);
        self
    }

    /// Returns the highest score and its category, if scores were recorded.
    pub fn highest_score(&self) -> Option<(&str, f64)> {
        self.scores
            .as_ref()?
            .iter()
            .map(|(category, score)| (category.as_str(), *score))
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Action a moderator took on a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationAction {
    Approve,
    Reject,
    Flag,
    Unflag,
    Revert,
}

/// Audit log entry for a moderation action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationLogEntry {
    pub id: String,
    pub preset_id: Uuid,
    pub moderator_discord_id: String,
    pub action: ModerationAction,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Preset counts by moderation status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationStats {
    pub pending_count: u64,
    pub approved_count: u64,
    pub rejected_count: u64,
    pub flagged_count: u64,
}

impl ModerationStats {
    /// Presets still awaiting a moderator.
    pub fn awaiting_review(&self) -> u64 {
        self.pending_count + self.flagged_count
    }

    pub fn total(&self) -> u64 {
        self.pending_count + self.approved_count + self.rejected_count + self.flagged_count
    }
}

//! Discord OAuth records.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Token response from Discord's OAuth token endpoint.
///
/// Only ever received, so it deserializes but does not serialize.
#[derive(Debug, Deserialize)]
pub struct DiscordTokenResponse {
    pub access_token: SecretString,
    pub token_type: String,
    /// Lifetime of the access token (seconds)
    pub expires_in: u64,
    pub refresh_token: SecretString,
    /// Space-separated granted scopes
    pub scope: String,
}

impl DiscordTokenResponse {
    /// Returns true if `scope` was granted.
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scope.split_whitespace().any(|granted| granted == scope)
    }
}

/// User object from Discord's `/users/@me` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
    /// Legacy discriminator; `"0"` for migrated usernames
    pub discriminator: String,
    pub global_name: Option<String>,
    pub avatar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mfa_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_type: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_flags: Option<u64>,
}

impl DiscordUser {
    /// Global display name, falling back to the username.
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }

    /// Returns true for users still on the legacy `name#1234` scheme.
    pub fn has_legacy_discriminator(&self) -> bool {
        self.discriminator != "0"
    }
}

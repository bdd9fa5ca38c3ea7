//! XIVAuth OAuth records.
//!
//! XIVAuth verifies ownership of FFXIV characters and can link a Discord
//! identity to the account.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PrimaryCharacter;

/// Token response from XIVAuth's OAuth token endpoint.
#[derive(Debug, Deserialize)]
pub struct XivAuthTokenResponse {
    pub access_token: SecretString,
    pub token_type: String,
    pub expires_in: u64,
    pub refresh_token: SecretString,
    pub scope: String,
}

/// Character as returned by the `/characters` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XivAuthCharacter {
    /// Lodestone ID
    pub id: u64,
    pub name: String,
    pub home_world: String,
    pub verified: bool,
}

/// Character registration, including the data center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XivAuthCharacterRegistration {
    pub lodestone_id: u64,
    pub name: String,
    pub home_world: String,
    pub data_center: String,
    pub verified: bool,
}

impl From<&XivAuthCharacterRegistration> for PrimaryCharacter {
    fn from(registration: &XivAuthCharacterRegistration) -> Self {
        PrimaryCharacter {
            name: registration.name.clone(),
            server: registration.home_world.clone(),
            verified: registration.verified,
        }
    }
}

/// Picks the character to show for a user: the first verified one, or the
/// first registration when none is verified.
pub fn primary_character(registrations: &[XivAuthCharacterRegistration]) -> Option<PrimaryCharacter> {
    registrations
        .iter()
        .find(|registration| registration.verified)
        .or_else(|| registrations.first())
        .map(PrimaryCharacter::from)
}

/// External account linked to an XIVAuth user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XivAuthSocialIdentity {
    /// Provider name, e.g. `"discord"`
    pub provider: String,
    pub external_id: String,
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User from XIVAuth's `/user` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XivAuthUser {
    pub id: Uuid,

    /// Present when the `user:social` scope was granted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_identities: Option<Vec<XivAuthSocialIdentity>>,

    pub mfa_enabled: bool,

    /// True if the user has at least one verified character
    pub verified_characters: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl XivAuthUser {
    /// Linked identity for `provider`, if any.
    pub fn identity(&self, provider: &str) -> Option<&XivAuthSocialIdentity> {
        self.social_identities
            .as_deref()?
            .iter()
            .find(|identity| identity.provider == provider)
    }

    /// Discord user ID from the linked Discord identity.
    pub fn discord_id(&self) -> Option<&str> {
        self.identity("discord")
            .map(|identity| identity.external_id.as_str())
    }
}

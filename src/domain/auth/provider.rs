//! Identity providers and the per-request authentication context.

use serde::{Deserialize, Serialize};
use std::fmt;

/// OAuth provider a user signed in with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Discord,
    XivAuth,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Discord => "discord",
            AuthProvider::XivAuth => "xivauth",
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a request was authenticated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthSource {
    #[default]
    None,
    /// Discord bot with a shared secret
    Bot,
    /// Web client with a JWT
    Web,
}

/// Authentication state attached to an API request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthContext {
    pub is_authenticated: bool,
    pub is_moderator: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_discord_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    pub auth_source: AuthSource,
}

impl AuthContext {
    /// Context for an unauthenticated request.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context for a request authenticated by source `source` on behalf of a user.
    pub fn user(
        source: AuthSource,
        discord_id: impl Into<String>,
        name: impl Into<String>,
        is_moderator: bool,
    ) -> Self {
        Self {
            is_authenticated: source != AuthSource::None,
            is_moderator,
            user_discord_id: Some(discord_id.into()),
            user_name: Some(name.into()),
            auth_source: source,
        }
    }

    /// Returns the acting user's Discord ID when the request is authenticated.
    pub fn acting_user(&self) -> Option<&str> {
        if self.is_authenticated {
            self.user_discord_id.as_deref()
        } else {
            None
        }
    }

    /// Returns true if the caller may moderate presets.
    pub fn can_moderate(&self) -> bool {
        self.is_authenticated && self.is_moderator
    }
}

//! Session token claims and OAuth flow state.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use super::secret;
use super::AuthProvider;

/// Verified FFXIV character linked through XIVAuth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryCharacter {
    pub name: String,
    pub server: String,
    pub verified: bool,
}

/// Claims carried by the session JWT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtPayload {
    /// Subject: the user's ID
    pub sub: String,
    /// Issued at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
    pub iss: String,
    /// Token ID, used for revocation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,

    pub username: String,
    pub global_name: Option<String>,
    /// Discord avatar hash
    pub avatar: Option<String>,

    pub auth_provider: AuthProvider,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xivauth_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_character: Option<PrimaryCharacter>,
}

impl JwtPayload {
    /// Returns true once `now_secs` reaches `exp`.
    pub fn is_expired(&self, now_secs: i64) -> bool {
        now_secs >= self.exp
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.is_expired(now.timestamp())
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Discord ID of the user, whichever provider issued the session.
    ///
    /// Discord sessions use the Discord ID as subject; XIVAuth sessions carry
    /// it separately when the user linked a Discord identity.
    pub fn discord_user_id(&self) -> Option<&str> {
        match self.auth_provider {
            AuthProvider::Discord => Some(self.discord_id.as_deref().unwrap_or(&self.sub)),
            AuthProvider::XivAuth => self.discord_id.as_deref(),
        }
    }

    /// Global display name, falling back to the username.
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }
}

/// State kept between the OAuth redirect and its callback.
///
/// `code_verifier` is the PKCE verifier. It is redacted from `Debug` output
/// and written in the clear only when the state is serialized for storage.
#[derive(Debug, Serialize, Deserialize)]
pub struct OAuthState {
    #[serde(serialize_with = "secret::expose")]
    pub code_verifier: SecretString,

    pub redirect_uri: String,

    /// Where to send the user after login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_path: Option<String>,
}

impl OAuthState {
    pub fn new(code_verifier: impl Into<String>, redirect_uri: impl Into<String>) -> Self {
        Self {
            code_verifier: SecretString::new(code_verifier.into()),
            redirect_uri: redirect_uri.into(),
            return_path: None,
        }
    }

    pub fn with_return_path(mut self, path: impl Into<String>) -> Self {
        self.return_path = Some(path.into());
        self
    }

    /// Same-site path to return to after login.
    ///
    /// Only absolute paths on this site are honored. Anything else yields
    /// `/`, including protocol-relative `//host` and `/\host` paths and paths
    /// containing whitespace or control characters, which browsers strip.
    pub fn safe_return_path(&self) -> &str {
        match self.return_path.as_deref() {
            Some(path) if is_same_site_path(path) => path,
            _ => "/",
        }
    }
}

fn is_same_site_path(path: &str) -> bool {
    path.starts_with('/')
        && !matches!(path.as_bytes().get(1), Some(b'/' | b'\\'))
        && !path.chars().any(|c| c.is_control() || c.is_whitespace())
}

//! OAuth worker responses.

use serde::{Deserialize, Serialize};

use super::{AuthProvider, DiscordUser, JwtPayload, PrimaryCharacter};
use crate::domain::api::ErrorBody;
use crate::domain::foundation::tagged::impl_success_tagged;

/// Signed-in user as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub username: String,
    pub global_name: Option<String>,
    pub avatar: Option<String>,
    /// Full avatar URL, resolved server-side
    pub avatar_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_provider: Option<AuthProvider>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_character: Option<PrimaryCharacter>,
}

impl AuthUser {
    pub fn from_claims(claims: &JwtPayload, avatar_url: Option<String>) -> Self {
        Self {
            id: claims.sub.clone(),
            username: claims.username.clone(),
            global_name: claims.global_name.clone(),
            avatar: claims.avatar.clone(),
            avatar_url,
            auth_provider: Some(claims.auth_provider),
            primary_character: claims.primary_character.clone(),
        }
    }
}

impl From<AuthUser> for UserInfoData {
    fn from(user: AuthUser) -> Self {
        Self {
            id: user.id,
            username: user.username,
            global_name: user.global_name,
            avatar: user.avatar,
            avatar_url: user.avatar_url,
        }
    }
}

impl From<&DiscordUser> for UserInfoData {
    fn from(user: &DiscordUser) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            global_name: user.global_name.clone(),
            avatar: user.avatar.clone(),
            avatar_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSuccess {
    /// Signed session JWT
    pub token: String,
    pub user: AuthUser,
    /// Token expiry (seconds since epoch)
    pub expires_at: i64,
}

/// Result of the OAuth callback exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResponse {
    Success(AuthSuccess),
    Error(ErrorBody),
}

impl_success_tagged!(AuthResponse, Success(AuthSuccess), Error(ErrorBody));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshSuccess {
    pub token: String,
    pub expires_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshResponse {
    Success(RefreshSuccess),
    Error(ErrorBody),
}

impl_success_tagged!(RefreshResponse, Success(RefreshSuccess), Error(ErrorBody));

/// Public profile fields returned by the user info endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfoData {
    pub id: String,
    pub username: String,
    pub global_name: Option<String>,
    pub avatar: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub user: UserInfoData,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInfoResponse {
    Success(UserInfo),
    Error(ErrorBody),
}

impl_success_tagged!(UserInfoResponse, Success(UserInfo), Error(ErrorBody));

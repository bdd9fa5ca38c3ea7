//! Auth module - OAuth providers, session claims and auth responses.
//!
//! Provider tokens and PKCE verifiers are held as [`secrecy::SecretString`]
//! so they never show up in logs or `Debug` output.

mod discord;
mod jwt;
mod provider;
mod response;
mod secret;
mod xivauth;

pub use discord::{DiscordTokenResponse, DiscordUser};
pub use jwt::{JwtPayload, OAuthState, PrimaryCharacter};
pub use provider::{AuthContext, AuthProvider, AuthSource};
pub use response::{
    AuthResponse, AuthSuccess, AuthUser, RefreshResponse, RefreshSuccess, UserInfo, UserInfoData,
    UserInfoResponse,
};
pub use xivauth::{
    primary_character, XivAuthCharacter, XivAuthCharacterRegistration, XivAuthSocialIdentity,
    XivAuthTokenResponse, XivAuthUser,
};

//! API module - Response envelopes, cache entries, moderation and pricing.

mod cache;
mod moderation;
mod price;
mod response;

pub use cache::CachedData;
pub use moderation::{
    FlaggedField, ModerationAction, ModerationLogEntry, ModerationMethod, ModerationResult,
    ModerationStats,
};
pub use price::{PriceData, RateLimitResult};
pub use response::{ApiResponse, ErrorBody};

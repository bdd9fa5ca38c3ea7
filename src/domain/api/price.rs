//! Market price and rate limit records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Market board pricing for a dye item (Universalis).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceData {
    #[serde(rename = "itemID")]
    pub item_id: i32,

    /// Average price from recent sales
    pub current_average: f64,

    pub current_min_price: f64,
    pub current_max_price: f64,

    /// Last update (ms since epoch)
    pub last_update: i64,

    /// World of the lowest listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world_id: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world_name: Option<String>,
}

impl PriceData {
    /// Spread between the highest and lowest current listing.
    pub fn spread(&self) -> f64 {
        self.current_max_price - self.current_min_price
    }
}

/// Result of a rate limit check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitResult {
    pub allowed: bool,

    /// Requests left in the current window
    pub remaining: u32,

    pub reset_at: DateTime<Utc>,

    /// Set when the check failed open because the backing store errored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kv_error: Option<bool>,
}

impl RateLimitResult {
    /// Seconds until the window resets, or zero once it has.
    pub fn retry_after_secs(&self, now: DateTime<Utc>) -> i64 {
        (self.reset_at - now).num_seconds().max(0)
    }

    /// Returns true if the result came from a failed store lookup.
    pub fn is_degraded(&self) -> bool {
        self.kv_error.unwrap_or(false)
    }
}

//! Cache entry envelope with expiry and optional integrity checksum.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Cached payload plus the metadata needed to expire and verify it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedData<T> {
    pub data: T,

    /// When the entry was written (ms since epoch)
    pub timestamp: i64,

    /// Time to live (ms)
    pub ttl: i64,

    /// Cache format version, for invalidating entries after layout changes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Lowercase hex SHA-256 of the serialized `data`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

impl<T> CachedData<T> {
    /// Wraps `data` written at `timestamp` with the given TTL.
    pub fn new(data: T, timestamp: i64, ttl: i64) -> Self {
        Self {
            data,
            timestamp,
            ttl,
            version: None,
            checksum: None,
        }
    }

    /// Tags the entry with a cache format version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Returns true once `now_ms` is past `timestamp + ttl`.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms.saturating_sub(self.timestamp) > self.ttl
    }

    /// Returns true if the entry was written under a different version.
    ///
    /// Entries written before versioning (no version) never match.
    pub fn is_stale_version(&self, current: &str) -> bool {
        self.version.as_deref() != Some(current)
    }
}

impl<T: Serialize> CachedData<T> {
    /// Computes and stores the checksum of `data`.
    pub fn with_checksum(mut self) -> Result<Self, serde_json::Error> {
        self.checksum = Some(checksum_of(&self.data)?);
        Ok(self)
    }

    /// Verifies `data` against the stored checksum.
    ///
    /// Entries without a checksum have nothing to verify and pass.
    pub fn verify_checksum(&self) -> Result<bool, serde_json::Error> {
        match &self.checksum {
            None => Ok(true),
            Some(expected) => Ok(checksum_of(&self.data)? == *expected),
        }
    }
}

fn checksum_of<T: Serialize>(data: &T) -> Result<String, serde_json::Error> {
    let bytes = serde_json::to_vec(data)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn expiry_is_exclusive_of_the_ttl_boundary() {
        let entry = CachedData::new("palette", 1_000, 500);
        assert!(!entry.is_expired(1_000));
        assert!(!entry.is_expired(1_500));
        assert!(entry.is_expired(1_501));
    }

    #[test]
    fn checksum_is_lowercase_sha256_hex() {
        let entry = CachedData::new("abc", 0, 10).with_checksum().unwrap();
        let checksum = entry.checksum.as_deref().unwrap();
        assert_eq!(checksum.len(), 64);
        assert!(checksum.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert!(entry.verify_checksum().unwrap());
    }

    #[test]
    fn checksum_hashes_compact_json_bytes() {
        let entry = CachedData::new(vec![1, 2, 3], 0, 10).with_checksum().unwrap();
        assert_eq!(
            entry.checksum.as_deref(),
            Some("a615eeaee21de5179de080de8c3052c8da901138406ba71c38c032845f7d54f4")
        );
    }

    #[test]
    fn tampered_data_fails_verification() {
        let mut entry = CachedData::new(vec![1, 2, 3], 0, 10).with_checksum().unwrap();
        entry.data.push(4);
        assert!(!entry.verify_checksum().unwrap());
    }

    #[test]
    fn entries_without_checksum_pass_verification() {
        assert!(CachedData::new(7, 0, 10).verify_checksum().unwrap());
    }

    #[test]
    fn version_staleness() {
        let legacy = CachedData::new((), 0, 10);
        assert!(legacy.is_stale_version("2"));

        let current = CachedData::new((), 0, 10).with_version("2");
        assert!(!current.is_stale_version("2"));
        assert!(current.is_stale_version("3"));
    }

    #[test]
    fn omits_absent_optional_fields() {
        let json = serde_json::to_value(CachedData::new(json!({ "a": 1 }), 5, 60)).unwrap();
        assert_eq!(json, json!({ "data": { "a": 1 }, "timestamp": 5, "ttl": 60 }));
    }
}

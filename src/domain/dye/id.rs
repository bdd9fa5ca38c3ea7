//! Dye identifier value object and the policy deciding which IDs are valid.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Lowest regular catalog dye ID.
pub const MIN_CATALOG_DYE_ID: i32 = 1;

/// Highest regular catalog dye ID.
pub const MAX_CATALOG_DYE_ID: i32 = 200;

/// Synthetic IDs (facewear dyes without a catalog entry) are at or below this value.
pub const MAX_SYNTHETIC_DYE_ID: i32 = -1000;

/// Which dye ID ranges a consumer accepts.
///
/// The catalog service only issues IDs in `[1, 200]`. Some consumers also
/// handle synthetic facewear IDs (`<= -1000`); they opt in through
/// configuration. IDs in the gap between the two ranges are never valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DyeIdPolicy {
    #[default]
    CatalogOnly,
    AllowSynthetic,
}

impl DyeIdPolicy {
    /// Maps the `allow_synthetic` configuration flag to a policy.
    pub fn from_flag(allow_synthetic: bool) -> Self {
        if allow_synthetic {
            DyeIdPolicy::AllowSynthetic
        } else {
            DyeIdPolicy::CatalogOnly
        }
    }

    /// Returns true if `id` is valid under this policy.
    pub fn accepts(&self, id: i64) -> bool {
        let catalog = (i64::from(MIN_CATALOG_DYE_ID)..=i64::from(MAX_CATALOG_DYE_ID)).contains(&id);
        match self {
            DyeIdPolicy::CatalogOnly => catalog,
            DyeIdPolicy::AllowSynthetic => {
                catalog || (i64::from(i32::MIN)..=i64::from(MAX_SYNTHETIC_DYE_ID)).contains(&id)
            }
        }
    }
}

/// Identifier of a dye.
///
/// Invalid input is an expected, frequent outcome (user-supplied search and
/// filter values), so constructors return `Option` rather than an error.
///
/// # Example
///
/// ```
/// use xivdye_types::domain::dye::DyeId;
///
/// assert_eq!(DyeId::new(200.0).map(|id| id.value()), Some(200));
/// assert!(DyeId::new(0.0).is_none());
/// assert!(DyeId::new(1.5).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i32")]
pub struct DyeId(i32);

impl DyeId {
    /// Validates a numeric ID against the catalog range `[1, 200]`.
    pub fn new(value: f64) -> Option<Self> {
        Self::with_policy(value, DyeIdPolicy::CatalogOnly)
    }

    /// Validates a numeric ID under the given policy.
    ///
    /// Non-integers, NaN and infinities are never valid.
    pub fn with_policy(value: f64, policy: DyeIdPolicy) -> Option<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return None;
        }
        if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
            return None;
        }
        Self::from_int_with_policy(value as i64, policy)
    }

    /// Validates an integer ID against the catalog range.
    pub fn from_int(id: i64) -> Option<Self> {
        Self::from_int_with_policy(id, DyeIdPolicy::CatalogOnly)
    }

    /// Validates an integer ID under the given policy.
    pub fn from_int_with_policy(id: i64, policy: DyeIdPolicy) -> Option<Self> {
        if !policy.accepts(id) {
            return None;
        }
        i32::try_from(id).ok().map(Self)
    }

    /// Returns the numeric ID.
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Returns true for synthetic (non-catalog) IDs.
    pub fn is_synthetic(&self) -> bool {
        self.0 <= MAX_SYNTHETIC_DYE_ID
    }
}

impl TryFrom<i64> for DyeId {
    type Error = ValidationError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Self::from_int(id).ok_or_else(|| {
            ValidationError::out_of_range(
                "dye_id",
                i64::from(MIN_CATALOG_DYE_ID),
                i64::from(MAX_CATALOG_DYE_ID),
                id,
            )
        })
    }
}

impl From<DyeId> for i32 {
    fn from(id: DyeId) -> Self {
        id.0
    }
}

impl fmt::Display for DyeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn id(value: f64) -> Option<i32> {
        DyeId::new(value).map(|id| id.value())
    }

    fn synthetic(value: f64) -> Option<i32> {
        DyeId::with_policy(value, DyeIdPolicy::AllowSynthetic).map(|id| id.value())
    }

    #[test]
    fn accepts_catalog_ids() {
        assert_eq!(id(1.0), Some(1));
        assert_eq!(id(100.0), Some(100));
        assert_eq!(id(200.0), Some(200));
    }

    #[test]
    fn rejects_ids_outside_catalog_range() {
        assert_eq!(id(0.0), None);
        assert_eq!(id(201.0), None);
        assert_eq!(id(999.0), None);
        assert_eq!(id(-1.0), None);
    }

    #[test]
    fn rejects_non_integers() {
        assert_eq!(id(1.5), None);
        assert_eq!(id(100.1), None);
        assert_eq!(id(0.9), None);
    }

    #[test]
    fn rejects_non_finite_values() {
        assert_eq!(id(f64::NAN), None);
        assert_eq!(id(f64::INFINITY), None);
        assert_eq!(id(f64::NEG_INFINITY), None);
    }

    #[test]
    fn catalog_policy_rejects_synthetic_ids() {
        assert_eq!(id(-1000.0), None);
        assert_eq!(id(-10000.0), None);
    }

    #[test]
    fn synthetic_policy_accepts_both_ranges() {
        assert_eq!(synthetic(1.0), Some(1));
        assert_eq!(synthetic(200.0), Some(200));
        assert_eq!(synthetic(-1000.0), Some(-1000));
        assert_eq!(synthetic(-1500.0), Some(-1500));
        assert_eq!(synthetic(-999_999.0), Some(-999_999));
    }

    #[test]
    fn synthetic_policy_rejects_the_gap() {
        for value in [0.0, -1.0, -100.0, -500.0, -999.0, 201.0, 1000.0] {
            assert_eq!(synthetic(value), None, "{} should be rejected", value);
        }
    }

    #[test]
    fn synthetic_policy_still_rejects_non_integers() {
        assert_eq!(synthetic(-1000.5), None);
        assert_eq!(synthetic(f64::NEG_INFINITY), None);
    }

    #[test]
    fn rejects_values_beyond_i32() {
        assert_eq!(synthetic(-1.0e12), None);
        assert!(DyeId::from_int_with_policy(i64::MIN, DyeIdPolicy::AllowSynthetic).is_none());
    }

    #[test]
    fn is_synthetic_reports_range() {
        let regular = DyeId::from_int(5).unwrap();
        let facewear = DyeId::from_int_with_policy(-1001, DyeIdPolicy::AllowSynthetic).unwrap();
        assert!(!regular.is_synthetic());
        assert!(facewear.is_synthetic());
    }

    #[test]
    fn policy_from_flag() {
        assert_eq!(DyeIdPolicy::from_flag(false), DyeIdPolicy::CatalogOnly);
        assert_eq!(DyeIdPolicy::from_flag(true), DyeIdPolicy::AllowSynthetic);
        assert_eq!(DyeIdPolicy::default(), DyeIdPolicy::CatalogOnly);
    }

    #[test]
    fn serializes_as_number() {
        let dye = DyeId::from_int(42).unwrap();
        assert_eq!(serde_json::to_string(&dye).unwrap(), "42");
    }

    #[test]
    fn deserialization_enforces_catalog_range() {
        let dye: DyeId = serde_json::from_str("7").unwrap();
        assert_eq!(dye.value(), 7);
        assert!(serde_json::from_str::<DyeId>("0").is_err());
        assert!(serde_json::from_str::<DyeId>("-1000").is_err());
    }

    #[test]
    fn try_from_reports_out_of_range() {
        let err = DyeId::try_from(201_i64).unwrap_err();
        assert_eq!(err, ValidationError::out_of_range("dye_id", 1, 200, 201));
    }

    proptest! {
        #[test]
        fn catalog_integers_pass_through(n in 1i32..=200) {
            prop_assert_eq!(id(f64::from(n)), Some(n));
        }

        #[test]
        fn integers_outside_catalog_are_absent(n in prop_oneof![i32::MIN..=0, 201..=i32::MAX]) {
            prop_assert_eq!(id(f64::from(n)), None);
        }

        #[test]
        fn fractional_values_are_absent(n in -2000i32..2000, frac in 0.01f64..0.99) {
            prop_assert_eq!(synthetic(f64::from(n) + frac), None);
        }
    }
}

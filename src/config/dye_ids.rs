//! Dye ID validation configuration

use serde::Deserialize;

use crate::domain::dye::DyeIdPolicy;

/// Which dye ID ranges this deployment accepts
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DyeIdConfig {
    /// Accept synthetic facewear IDs (<= -1000) as well as catalog IDs
    #[serde(default)]
    pub allow_synthetic: bool,
}

impl DyeIdConfig {
    /// Policy to validate dye IDs with
    pub fn policy(&self) -> DyeIdPolicy {
        DyeIdPolicy::from_flag(self.allow_synthetic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_catalog_only() {
        assert_eq!(DyeIdConfig::default().policy(), DyeIdPolicy::CatalogOnly);
    }

    #[test]
    fn test_deserialization() {
        let config: DyeIdConfig = serde_json::from_str(r#"{"allow_synthetic": true}"#).unwrap();
        assert_eq!(config.policy(), DyeIdPolicy::AllowSynthetic);

        let config: DyeIdConfig = serde_json::from_str("{}").unwrap();
        assert!(!config.allow_synthetic);
    }
}

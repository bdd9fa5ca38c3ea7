//! Dye database state.

use serde::{Deserialize, Serialize};

use super::{Dye, DyeId};

/// Loaded dye database and its load metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DyeDatabase {
    pub dyes: Vec<Dye>,

    /// When dyes were last loaded (ms since epoch)
    pub last_loaded: i64,

    pub is_loaded: bool,
}

impl DyeDatabase {
    /// Creates a loaded database stamped with `loaded_at_ms`.
    pub fn loaded(dyes: Vec<Dye>, loaded_at_ms: i64) -> Self {
        tracing::debug!(count = dyes.len(), "dye database loaded");
        Self {
            dyes,
            last_loaded: loaded_at_ms,
            is_loaded: true,
        }
    }

    /// Finds a dye by its dye ID.
    pub fn find_by_id(&self, id: DyeId) -> Option<&Dye> {
        self.dyes.iter().find(|dye| dye.id == id.value())
    }

    /// Finds a dye by its FFXIV item ID.
    pub fn find_by_item_id(&self, item_id: i32) -> Option<&Dye> {
        self.dyes.iter().find(|dye| dye.item_id == item_id)
    }

    /// Returns the number of dyes.
    pub fn len(&self) -> usize {
        self.dyes.len()
    }

    /// Returns true if no dyes are loaded.
    pub fn is_empty(&self) -> bool {
        self.dyes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dye::fixtures::dye;

    fn database() -> DyeDatabase {
        DyeDatabase::loaded(
            vec![
                dye(1, "Snow White", "#E4DFD0"),
                dye(2, "Ash Grey", "#ACA8A2"),
            ],
            1_700_000_000_000,
        )
    }

    #[test]
    fn default_is_unloaded_and_empty() {
        let db = DyeDatabase::default();
        assert!(!db.is_loaded);
        assert!(db.is_empty());
        assert_eq!(db.last_loaded, 0);
    }

    #[test]
    fn loaded_sets_metadata() {
        let db = database();
        assert!(db.is_loaded);
        assert_eq!(db.len(), 2);
        assert_eq!(db.last_loaded, 1_700_000_000_000);
    }

    #[test]
    fn find_by_id_returns_matching_dye() {
        let db = database();
        let id = DyeId::from_int(2).unwrap();
        assert_eq!(db.find_by_id(id).map(|d| d.name.as_str()), Some("Ash Grey"));
        assert!(db.find_by_id(DyeId::from_int(150).unwrap()).is_none());
    }

    #[test]
    fn find_by_item_id_returns_matching_dye() {
        let db = database();
        assert_eq!(
            db.find_by_item_id(5701).map(|d| d.name.as_str()),
            Some("Snow White")
        );
        assert!(db.find_by_item_id(1).is_none());
    }

    #[test]
    fn serializes_with_camel_case_metadata() {
        let json = serde_json::to_value(database()).unwrap();
        assert_eq!(json["isLoaded"], true);
        assert_eq!(json["lastLoaded"], 1_700_000_000_000_i64);
        assert_eq!(json["dyes"].as_array().map(Vec::len), Some(2));
    }
}

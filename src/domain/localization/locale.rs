//! Supported locales and the per-locale translation file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::{ClanKey, GrandCompanyKey, HarmonyTypeKey, JobKey, RaceKey, TranslationKey};
use crate::domain::color::VisionType;
use crate::domain::foundation::ValidationError;

/// Supported locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    #[default]
    En,
    Ja,
    De,
    Fr,
    Ko,
    Zh,
}

impl LocaleCode {
    pub fn all() -> &'static [LocaleCode] {
        &[
            LocaleCode::En,
            LocaleCode::Ja,
            LocaleCode::De,
            LocaleCode::Fr,
            LocaleCode::Ko,
            LocaleCode::Zh,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LocaleCode::En => "en",
            LocaleCode::Ja => "ja",
            LocaleCode::De => "de",
            LocaleCode::Fr => "fr",
            LocaleCode::Ko => "ko",
            LocaleCode::Zh => "zh",
        }
    }

    /// Name of the language in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            LocaleCode::En => "English",
            LocaleCode::Ja => "日本語",
            LocaleCode::De => "Deutsch",
            LocaleCode::Fr => "Français",
            LocaleCode::Ko => "한국어",
            LocaleCode::Zh => "中文",
        }
    }

    /// Maps a BCP 47 style tag (`"ja-JP"`, `"en_US"`, `"FR"`) to a supported
    /// locale by its primary language subtag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?;
        Self::all()
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(primary))
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LocaleCode {
    type Err = ValidationError;

    /// Strict parse of the two-letter code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("locale", format!("unsupported locale '{}'", s))
            })
    }
}

/// Generation metadata of a locale file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleMeta {
    pub version: String,
    pub generated: DateTime<Utc>,
    pub dye_count: u32,
}

/// Translations for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleData {
    pub locale: LocaleCode,
    pub meta: LocaleMeta,
    pub labels: BTreeMap<TranslationKey, String>,

    /// Dye names keyed by item ID
    pub dye_names: BTreeMap<String, String>,

    /// Category names keyed by English category
    pub categories: BTreeMap<String, String>,

    /// Acquisition methods keyed by English name
    pub acquisitions: BTreeMap<String, String>,

    pub metallic_dye_ids: Vec<i32>,
    pub harmony_types: BTreeMap<HarmonyTypeKey, String>,
    pub vision_types: BTreeMap<VisionType, String>,
    pub job_names: BTreeMap<JobKey, String>,
    pub grand_company_names: BTreeMap<GrandCompanyKey, String>,
    pub races: BTreeMap<RaceKey, String>,
    pub clans: BTreeMap<ClanKey, String>,
}

impl LocaleData {
    /// Translated dye name for an item ID.
    pub fn dye_name(&self, item_id: i32) -> Option<&str> {
        self.dye_names.get(&item_id.to_string()).map(String::as_str)
    }

    pub fn label(&self, key: TranslationKey) -> Option<&str> {
        self.labels.get(&key).map(String::as_str)
    }

    /// Translated category, falling back to the English name.
    pub fn category<'a>(&'a self, english: &'a str) -> &'a str {
        self.categories.get(english).map_or(english, String::as_str)
    }

    pub fn is_metallic(&self, item_id: i32) -> bool {
        self.metallic_dye_ids.contains(&item_id)
    }

    /// Label keys with no translation in this file.
    pub fn missing_labels(&self) -> Vec<TranslationKey> {
        TranslationKey::all()
            .iter()
            .copied()
            .filter(|key| !self.labels.contains_key(key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_tag_uses_primary_subtag() {
        assert_eq!(LocaleCode::from_tag("ja-JP"), Some(LocaleCode::Ja));
        assert_eq!(LocaleCode::from_tag("en_US"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_tag("FR"), Some(LocaleCode::Fr));
        assert_eq!(LocaleCode::from_tag("zh-TW"), Some(LocaleCode::Zh));
        assert_eq!(LocaleCode::from_tag("pt-BR"), None);
        assert_eq!(LocaleCode::from_tag(""), None);
    }

    #[test]
    fn from_str_is_strict() {
        assert_eq!("ko".parse::<LocaleCode>().unwrap(), LocaleCode::Ko);
        assert!("ko-KR".parse::<LocaleCode>().is_err());
        assert!("EN".parse::<LocaleCode>().is_err());
    }

    fn locale_json() -> serde_json::Value {
        json!({
            "locale": "ja",
            "meta": { "version": "1.0.0", "generated": "2025-01-10T08:00:00Z", "dyeCount": 2 },
            "labels": { "dye": "カララント", "metallic": "メタリック" },
            "dyeNames": { "5729": "スノウホワイト" },
            "categories": { "Neutral": "ニュートラル" },
            "acquisitions": {},
            "metallicDyeIds": [13114],
            "harmonyTypes": { "splitComplementary": "分割補色" },
            "visionTypes": { "deuteranopia": "2型色覚" },
            "jobNames": { "darkKnight": "暗黒騎士" },
            "grandCompanyNames": { "immortalFlames": "不滅隊" },
            "races": { "auRa": "アウラ" },
            "clans": { "seaWolf": "ゼーヴォルフ" }
        })
    }

    #[test]
    fn parses_locale_file() {
        let data: LocaleData = serde_json::from_value(locale_json()).unwrap();
        assert_eq!(data.locale, LocaleCode::Ja);
        assert_eq!(data.meta.dye_count, 2);
        assert_eq!(data.dye_name(5729), Some("スノウホワイト"));
        assert_eq!(data.dye_name(1), None);
        assert_eq!(data.label(TranslationKey::Dye), Some("カララント"));
        assert_eq!(data.vision_types.get(&VisionType::Deuteranopia).map(String::as_str), Some("2型色覚"));
        assert_eq!(data.races.get(&RaceKey::AuRa).map(String::as_str), Some("アウラ"));
        assert!(data.is_metallic(13114));
    }

    #[test]
    fn category_falls_back_to_english() {
        let data: LocaleData = serde_json::from_value(locale_json()).unwrap();
        assert_eq!(data.category("Neutral"), "ニュートラル");
        assert_eq!(data.category("Purple"), "Purple");
    }

    #[test]
    fn reports_missing_labels() {
        let data: LocaleData = serde_json::from_value(locale_json()).unwrap();
        let missing = data.missing_labels();
        assert!(missing.contains(&TranslationKey::Cosmic));
        assert!(!missing.contains(&TranslationKey::Dye));
        assert_eq!(missing.len(), 5);
    }

    #[test]
    fn unknown_label_key_is_rejected() {
        let mut value = locale_json();
        value["labels"]["sparkly"] = json!("x");
        assert!(serde_json::from_value::<LocaleData>(value).is_err());
    }
}

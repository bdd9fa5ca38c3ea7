//! Localization module - Locale codes, translation files and locale resolution.

mod keys;
mod locale;
mod preference;

pub use keys::{ClanKey, GrandCompanyKey, HarmonyTypeKey, JobKey, RaceKey, TranslationKey};
pub use locale::{LocaleCode, LocaleData, LocaleMeta};
pub use preference::LocalePreference;

use serde::{Deserialize, Serialize};

use super::LocaleCode;

/// Locale sources for a Discord interaction.
///
/// Resolution order is explicit user choice, then the guild's preferred
/// locale, then the client's system locale, then `fallback`. Guild and
/// system values are raw Discord tags such as `"ja"` or `"en-US"` and are
/// skipped when they name an unsupported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalePreference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit: Option<LocaleCode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    pub fallback: LocaleCode,
}

impl LocalePreference {
    /// Preference with no sources set, resolving to `fallback`.
    pub fn new(fallback: LocaleCode) -> Self {
        Self {
            explicit: None,
            guild: None,
            system: None,
            fallback,
        }
    }

    /// Picks the first supported locale in resolution order.
    pub fn resolve(&self) -> LocaleCode {
        self.explicit
            .or_else(|| self.guild.as_deref().and_then(LocaleCode::from_tag))
            .or_else(|| self.system.as_deref().and_then(LocaleCode::from_tag))
            .unwrap_or(self.fallback)
    }
}

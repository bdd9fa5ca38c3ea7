//! Keys of the translated label tables in a locale file.

use serde::{Deserialize, Serialize};

use crate::domain::character::{Race, SubRace};

/// UI label keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TranslationKey {
    Dye,
    Dark,
    Metallic,
    Pastel,
    Cosmic,
    CosmicExploration,
    CosmicFortunes,
}

impl TranslationKey {
    pub fn all() -> &'static [TranslationKey] {
        &[
            TranslationKey::Dye,
            TranslationKey::Dark,
            TranslationKey::Metallic,
            TranslationKey::Pastel,
            TranslationKey::Cosmic,
            TranslationKey::CosmicExploration,
            TranslationKey::CosmicFortunes,
        ]
    }
}

/// Color harmony names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HarmonyTypeKey {
    Complementary,
    Analogous,
    Triadic,
    SplitComplementary,
    Tetradic,
    Square,
    Monochromatic,
    Compound,
    Shades,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JobKey {
    Paladin,
    Warrior,
    DarkKnight,
    Gunbreaker,
    WhiteMage,
    Scholar,
    Astrologian,
    Sage,
    Monk,
    Dragoon,
    Ninja,
    Samurai,
    Reaper,
    Viper,
    Bard,
    Machinist,
    Dancer,
    BlackMage,
    Summoner,
    RedMage,
    Pictomancer,
    BlueMage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GrandCompanyKey {
    Maelstrom,
    TwinAdder,
    ImmortalFlames,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RaceKey {
    Hyur,
    Elezen,
    Lalafell,
    Miqote,
    Roegadyn,
    AuRa,
    Hrothgar,
    Viera,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClanKey {
    Midlander,
    Highlander,
    Wildwood,
    Duskwight,
    Plainsfolk,
    Dunesfolk,
    SeekerOfTheSun,
    KeeperOfTheMoon,
    SeaWolf,
    Hellsguard,
    Raen,
    Xaela,
    Helion,
    TheLost,
    Rava,
    Veena,
}

impl From<Race> for RaceKey {
    fn from(race: Race) -> Self {
        match race {
            Race::Hyur => RaceKey::Hyur,
            Race::Elezen => RaceKey::Elezen,
            Race::Lalafell => RaceKey::Lalafell,
            Race::Miqote => RaceKey::Miqote,
            Race::Roegadyn => RaceKey::Roegadyn,
            Race::AuRa => RaceKey::AuRa,
            Race::Hrothgar => RaceKey::Hrothgar,
            Race::Viera => RaceKey::Viera,
        }
    }
}

impl From<SubRace> for ClanKey {
    fn from(subrace: SubRace) -> Self {
        match subrace {
            SubRace::Midlander => ClanKey::Midlander,
            SubRace::Highlander => ClanKey::Highlander,
            SubRace::Wildwood => ClanKey::Wildwood,
            SubRace::Duskwight => ClanKey::Duskwight,
            SubRace::Plainsfolk => ClanKey::Plainsfolk,
            SubRace::Dunesfolk => ClanKey::Dunesfolk,
            SubRace::SeekerOfTheSun => ClanKey::SeekerOfTheSun,
            SubRace::KeeperOfTheMoon => ClanKey::KeeperOfTheMoon,
            SubRace::SeaWolf => ClanKey::SeaWolf,
            SubRace::Hellsguard => ClanKey::Hellsguard,
            SubRace::Raen => ClanKey::Raen,
            SubRace::Xaela => ClanKey::Xaela,
            SubRace::Helion => ClanKey::Helion,
            SubRace::TheLost => ClanKey::TheLost,
            SubRace::Rava => ClanKey::Rava,
            SubRace::Veena => ClanKey::Veena,
        }
    }
}

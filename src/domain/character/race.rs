//! Playable races, their clans and genders.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Playable race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Race {
    Hyur,
    Elezen,
    Lalafell,
    #[serde(rename = "Miqo'te")]
    Miqote,
    Roegadyn,
    AuRa,
    Hrothgar,
    Viera,
}

impl Race {
    pub fn all() -> &'static [Race] {
        &[
            Race::Hyur,
            Race::Elezen,
            Race::Lalafell,
            Race::Miqote,
            Race::Roegadyn,
            Race::AuRa,
            Race::Hrothgar,
            Race::Viera,
        ]
    }

    /// The two clans of this race.
    pub fn subraces(&self) -> [SubRace; 2] {
        match self {
            Race::Hyur => [SubRace::Midlander, SubRace::Highlander],
            Race::Elezen => [SubRace::Wildwood, SubRace::Duskwight],
            Race::Lalafell => [SubRace::Plainsfolk, SubRace::Dunesfolk],
            Race::Miqote => [SubRace::SeekerOfTheSun, SubRace::KeeperOfTheMoon],
            Race::Roegadyn => [SubRace::SeaWolf, SubRace::Hellsguard],
            Race::AuRa => [SubRace::Raen, SubRace::Xaela],
            Race::Hrothgar => [SubRace::Helion, SubRace::TheLost],
            Race::Viera => [SubRace::Rava, SubRace::Veena],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Race::Hyur => "Hyur",
            Race::Elezen => "Elezen",
            Race::Lalafell => "Lalafell",
            Race::Miqote => "Miqo'te",
            Race::Roegadyn => "Roegadyn",
            Race::AuRa => "AuRa",
            Race::Hrothgar => "Hrothgar",
            Race::Viera => "Viera",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Clan (subrace). Hair and skin palettes differ per clan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SubRace {
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

impl SubRace {
    /// Race this clan belongs to.
    pub fn race(&self) -> Race {
        match self {
            SubRace::Midlander | SubRace::Highlander => Race::Hyur,
            SubRace::Wildwood | SubRace::Duskwight => Race::Elezen,
            SubRace::Plainsfolk | SubRace::Dunesfolk => Race::Lalafell,
            SubRace::SeekerOfTheSun | SubRace::KeeperOfTheMoon => Race::Miqote,
            SubRace::SeaWolf | SubRace::Hellsguard => Race::Roegadyn,
            SubRace::Raen | SubRace::Xaela => Race::AuRa,
            SubRace::Helion | SubRace::TheLost => Race::Hrothgar,
            SubRace::Rava | SubRace::Veena => Race::Viera,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

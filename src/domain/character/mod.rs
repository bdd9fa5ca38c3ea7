//! Character module - Character creator palettes, races and clans.

mod color;
mod race;

pub use color::{
    CharacterColor, CharacterColorCategory, CharacterColorMatch, GridDimensions,
    RaceSpecificColorCategory, SharedColorCategory,
};
pub use race::{Gender, Race, SubRace};

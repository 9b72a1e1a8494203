//! Character classes and class sets used for skill eligibility.

use bitflags::bitflags;
use strum::IntoEnumIterator;

/// Character class tags.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CharacterKind {
    Warrior,
    Wizard,
    Archer,
}

impl CharacterKind {
    pub const fn flag(self) -> CharacterKinds {
        match self {
            Self::Warrior => CharacterKinds::WARRIOR,
            Self::Wizard => CharacterKinds::WIZARD,
            Self::Archer => CharacterKinds::ARCHER,
        }
    }
}

bitflags! {
    /// Set of character classes.
    ///
    /// Used both for the classes a character belongs to and for the classes
    /// a skill admits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CharacterKinds: u8 {
        const WARRIOR = 1 << 0;
        const WIZARD  = 1 << 1;
        const ARCHER  = 1 << 2;
    }
}

impl CharacterKinds {
    /// Iterates the contained classes in declaration order.
    pub fn kinds(self) -> impl Iterator<Item = CharacterKind> {
        CharacterKind::iter().filter(move |kind| self.contains(kind.flag()))
    }
}

impl FromIterator<CharacterKind> for CharacterKinds {
    fn from_iter<I: IntoIterator<Item = CharacterKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, kind| set | kind.flag())
    }
}

impl From<CharacterKind> for CharacterKinds {
    fn from(kind: CharacterKind) -> Self {
        kind.flag()
    }
}

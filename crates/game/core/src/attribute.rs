//! Bounded numeric stats carried by every character.
//!
//! An [`Attribute`] tracks a current value capped above by a mutable maximum.
//! There is no lower bound: health may fall below zero before the
//! owning character is checked for incapacitation.
//!
//! Characters store their attributes in an [`AttributeTable`], a fixed-size
//! table indexed by [`AttributeKind`]. Skills and effects receive the table by
//! exclusive reference instead of holding aliases to individual attributes.

use bitflags::bitflags;
use strum::{EnumCount, IntoEnumIterator};

use crate::character::CharacterError;

/// Kinds of attributes recognized by the engine.
///
/// The string forms (`health`, `mana`, `attack`, `defense`) are the names used
/// by persisted character snapshots.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeKind {
    /// Health points. A value at or below zero means incapacitated.
    #[strum(serialize = "health")]
    #[cfg_attr(feature = "serde", serde(rename = "health"))]
    Hp,
    /// Mana, spent by skills.
    #[strum(serialize = "mana")]
    #[cfg_attr(feature = "serde", serde(rename = "mana"))]
    Mana,
    /// Attack strength, scales outgoing damage.
    #[strum(serialize = "attack")]
    #[cfg_attr(feature = "serde", serde(rename = "attack"))]
    Atk,
    /// Defense, mitigates incoming damage by one percent per point.
    #[strum(serialize = "defense")]
    #[cfg_attr(feature = "serde", serde(rename = "defense"))]
    Def,
}

impl AttributeKind {
    /// Slot index inside an [`AttributeTable`].
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Single-kind set containing this attribute.
    pub const fn flag(self) -> AttributeSet {
        match self {
            Self::Hp => AttributeSet::HP,
            Self::Mana => AttributeSet::MANA,
            Self::Atk => AttributeSet::ATK,
            Self::Def => AttributeSet::DEF,
        }
    }
}

bitflags! {
    /// Set of attribute kinds targeted by an effect.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct AttributeSet: u8 {
        const HP   = 1 << 0;
        const MANA = 1 << 1;
        const ATK  = 1 << 2;
        const DEF  = 1 << 3;
    }
}

impl AttributeSet {
    /// Iterates the contained kinds in table order.
    pub fn kinds(self) -> impl Iterator<Item = AttributeKind> {
        AttributeKind::iter().filter(move |kind| self.contains(kind.flag()))
    }
}

impl FromIterator<AttributeKind> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = AttributeKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, kind| set | kind.flag())
    }
}

impl From<AttributeKind> for AttributeSet {
    fn from(kind: AttributeKind) -> Self {
        kind.flag()
    }
}

/// A named numeric stat with a current value bounded above by a maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    kind: AttributeKind,
    value: i32,
    max_value: i32,
}

impl Attribute {
    /// Creates an attribute at full value (`max_value == value`).
    pub const fn new(kind: AttributeKind, value: i32) -> Self {
        Self {
            kind,
            value,
            max_value: value,
        }
    }

    /// Creates an attribute with an explicit maximum.
    ///
    /// The pair is taken as-is so restored characters keep their exact state.
    pub const fn with_max(kind: AttributeKind, value: i32, max_value: i32) -> Self {
        Self {
            kind,
            value,
            max_value,
        }
    }

    pub const fn kind(&self) -> AttributeKind {
        self.kind
    }

    pub const fn value(&self) -> i32 {
        self.value
    }

    pub const fn max_value(&self) -> i32 {
        self.max_value
    }

    /// Applies a signed change to the current value.
    ///
    /// The delta is rounded up before the bound check. Results above the
    /// maximum snap to the maximum; negative results are kept.
    pub fn apply_change(&mut self, delta: f64) {
        let step = delta.ceil() as i32;
        let next = self.value.saturating_add(step);
        self.value = if next > self.max_value {
            self.max_value
        } else {
            next
        };
    }

    /// Restores the current value to the maximum.
    pub fn reset_value(&mut self) {
        self.value = self.max_value;
    }

    /// Replaces the maximum without touching the current value.
    pub fn update_max_value(&mut self, max_value: i32) {
        self.max_value = max_value;
    }
}

/// Fixed-size attribute storage indexed by [`AttributeKind`].
///
/// Each kind has at most one slot, so keys are unique by construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeTable {
    slots: [Option<Attribute>; AttributeKind::COUNT],
}

impl AttributeTable {
    /// Creates a table with no attributes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a fully populated table, every attribute at full value.
    pub fn standard(hp: i32, mana: i32, atk: i32, def: i32) -> Self {
        let mut table = Self::empty();
        table.insert(Attribute::new(AttributeKind::Hp, hp));
        table.insert(Attribute::new(AttributeKind::Mana, mana));
        table.insert(Attribute::new(AttributeKind::Atk, atk));
        table.insert(Attribute::new(AttributeKind::Def, def));
        table
    }

    /// Stores an attribute in its slot, returning the one it replaced.
    pub fn insert(&mut self, attribute: Attribute) -> Option<Attribute> {
        self.slots[attribute.kind.as_index()].replace(attribute)
    }

    pub fn get(&self, kind: AttributeKind) -> Option<&Attribute> {
        self.slots[kind.as_index()].as_ref()
    }

    pub fn get_mut(&mut self, kind: AttributeKind) -> Option<&mut Attribute> {
        self.slots[kind.as_index()].as_mut()
    }

    /// Looks up an attribute, failing with `AttributeNotFound` when absent.
    pub fn require(&self, kind: AttributeKind) -> Result<&Attribute, CharacterError> {
        self.get(kind).ok_or(CharacterError::AttributeNotFound(kind))
    }

    /// Mutable counterpart of [`require`](Self::require).
    pub fn require_mut(&mut self, kind: AttributeKind) -> Result<&mut Attribute, CharacterError> {
        self.get_mut(kind)
            .ok_or(CharacterError::AttributeNotFound(kind))
    }

    pub fn contains(&self, kind: AttributeKind) -> bool {
        self.slots[kind.as_index()].is_some()
    }

    /// Current value of `kind`, if present.
    pub fn value(&self, kind: AttributeKind) -> Option<i32> {
        self.get(kind).map(Attribute::value)
    }

    /// Iterates present attributes in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.slots.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Attribute> {
        self.slots.iter_mut().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl From<AttributePreset> for AttributeTable {
    fn from(preset: AttributePreset) -> Self {
        preset.table()
    }
}

/// Stat lines used to build characters and enemies of a given difficulty.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum AttributePreset {
    #[default]
    Default,
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl AttributePreset {
    /// Returns `(hp, mana, atk, def)` for this preset.
    pub const fn stats(self) -> (i32, i32, i32, i32) {
        match self {
            Self::Default => (100, 100, 10, 10),
            Self::Easy => (50, 50, 5, 0),
            Self::Medium => (200, 200, 15, 15),
            Self::Hard => (300, 300, 20, 20),
            Self::VeryHard => (400, 400, 55, 45),
        }
    }

    pub fn table(self) -> AttributeTable {
        let (hp, mana, atk, def) = self.stats();
        AttributeTable::standard(hp, mana, atk, def)
    }
}

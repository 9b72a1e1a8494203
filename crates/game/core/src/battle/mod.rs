//! Turn resolution between exactly two characters.
//!
//! A [`BattleSystem`] borrows both combatants for the duration of one battle.
//! It stores no combat state of its own: whether the battle is over, and who
//! won, is always recomputed from the combatants' health.
//!
//! ```text
//!   ACTIVE ──(either combatant is_dead)──▶ OVER
//! ```

mod errors;

pub use errors::BattleError;

use crate::character::Character;
use crate::skill::SkillOutcome;

/// One of the two combatants.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    pub const fn is_first(self) -> bool {
        matches!(self, Self::First)
    }
}

impl From<bool> for Side {
    /// `true` selects the first combatant.
    fn from(is_first: bool) -> Self {
        if is_first { Self::First } else { Self::Second }
    }
}

/// Derived battle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleOutcome {
    /// Both combatants are standing.
    Ongoing,
    /// Exactly one combatant is standing.
    Winner(Side),
    /// Both combatants fell at the same time.
    Draw,
}

impl BattleOutcome {
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// Result of a resolved turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub side: Side,
    pub skill: String,
    pub outcome: SkillOutcome,
    /// Battle state right after the turn.
    pub battle: BattleOutcome,
}

/// Orchestrates turns between two borrowed characters.
pub struct BattleSystem<'a> {
    first: &'a mut Character,
    second: &'a mut Character,
}

impl<'a> BattleSystem<'a> {
    /// Starts a battle. Both combatants must be alive.
    pub fn new(first: &'a mut Character, second: &'a mut Character) -> Result<Self, BattleError> {
        if first.is_dead() {
            return Err(BattleError::CombatantIncapacitated { side: Side::First });
        }
        if second.is_dead() {
            return Err(BattleError::CombatantIncapacitated { side: Side::Second });
        }
        Ok(Self { first, second })
    }

    /// Resolves `skill_name` for `side` against the opposing combatant.
    ///
    /// Unknown skill names and turns after the battle ended fail without
    /// mutating either combatant.
    pub fn execute_turn(
        &mut self,
        skill_name: &str,
        side: Side,
    ) -> Result<TurnReport, BattleError> {
        if self.is_battle_over() {
            return Err(BattleError::BattleOver);
        }

        let (actor, opponent) = self.split_mut(side);
        let outcome = actor.use_skill(skill_name, &mut [opponent])?;

        Ok(TurnReport {
            side,
            skill: skill_name.to_owned(),
            outcome,
            battle: self.outcome(),
        })
    }

    /// True once either combatant is dead.
    pub fn is_battle_over(&self) -> bool {
        self.first.is_dead() || self.second.is_dead()
    }

    pub fn outcome(&self) -> BattleOutcome {
        match (self.first.is_dead(), self.second.is_dead()) {
            (false, false) => BattleOutcome::Ongoing,
            (false, true) => BattleOutcome::Winner(Side::First),
            (true, false) => BattleOutcome::Winner(Side::Second),
            (true, true) => BattleOutcome::Draw,
        }
    }

    /// The surviving combatant, `None` while ongoing or on a draw.
    pub fn winner_character(&self) -> Option<&Character> {
        match self.outcome() {
            BattleOutcome::Winner(side) => Some(self.combatant(side)),
            BattleOutcome::Ongoing | BattleOutcome::Draw => None,
        }
    }

    pub fn combatant(&self, side: Side) -> &Character {
        match side {
            Side::First => &*self.first,
            Side::Second => &*self.second,
        }
    }

    pub fn combatant_mut(&mut self, side: Side) -> &mut Character {
        match side {
            Side::First => &mut *self.first,
            Side::Second => &mut *self.second,
        }
    }

    fn split_mut(&mut self, side: Side) -> (&mut Character, &mut Character) {
        match side {
            Side::First => (&mut *self.first, &mut *self.second),
            Side::Second => (&mut *self.second, &mut *self.first),
        }
    }
}

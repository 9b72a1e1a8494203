//! Battle log types.
//!
//! Every observable step of a run is recorded as a [`BattleEvent`], in the
//! order it happened, and returned inside the [`BattleSummary`].

use game_core::{Side, TurnReport};
use serde::{Deserialize, Serialize};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleResult {
    /// One combatant is left standing.
    Victory { winner: Side },
    /// Both combatants fell during the same turn.
    Draw,
    /// The round limit was reached with both combatants standing.
    Stalemate,
}

impl BattleResult {
    pub fn winner(self) -> Option<Side> {
        match self {
            Self::Victory { winner } => Some(winner),
            Self::Draw | Self::Stalemate => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    Started {
        first: String,
        second: String,
    },

    /// Active effects were activated at the start of `side`'s turn.
    EffectsApplied {
        round: u32,
        side: Side,
        applied: usize,
        expired: usize,
    },

    TurnResolved {
        round: u32,
        report: TurnReport,
    },

    /// The selector passed.
    TurnSkipped {
        round: u32,
        side: Side,
    },

    /// The chosen skill could not be used; nothing was mutated.
    TurnFailed {
        round: u32,
        side: Side,
        skill: String,
        error: String,
    },

    /// Both combatants recovered mana at the end of a round.
    ManaRegenerated {
        round: u32,
        amount: i32,
    },

    Finished {
        result: BattleResult,
        rounds: u32,
    },

    ExperienceAwarded {
        side: Side,
        amount: u64,
    },

    LevelUp {
        side: Side,
        level: u32,
    },
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSummary {
    pub result: BattleResult,
    /// Rounds started, including the one the battle ended in.
    pub rounds: u32,
    pub events: Vec<BattleEvent>,
}

impl BattleSummary {
    /// Turns in which a skill resolved.
    pub fn resolved_turns(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, BattleEvent::TurnResolved { .. }))
            .count()
    }

    /// Levels gained by the winner, in order.
    pub fn level_ups(&self) -> impl Iterator<Item = u32> + '_ {
        self.events.iter().filter_map(|event| match event {
            BattleEvent::LevelUp { level, .. } => Some(*level),
            _ => None,
        })
    }
}

//! Error types for battle turn resolution.

use crate::character::CharacterError;
use crate::error::{ErrorSeverity, GameError};

use super::Side;

/// Errors surfaced while running a battle.
///
/// A failed turn leaves both combatants exactly as they were.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    #[error("turn failed: {0}")]
    Character(#[from] CharacterError),

    #[error("battle is already over")]
    BattleOver,

    #[error("{side} combatant is incapacitated before the battle started")]
    CombatantIncapacitated { side: Side },
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Character(error) => error.severity(),
            Self::BattleOver => ErrorSeverity::Recoverable,
            Self::CombatantIncapacitated { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Character(error) => error.error_code(),
            Self::BattleOver => "BATTLE_OVER",
            Self::CombatantIncapacitated { .. } => "BATTLE_COMBATANT_INCAPACITATED",
        }
    }
}

//! Unified error types surfaced by the runtime API.
//!
//! Wraps core battle failures and runner misconfiguration so clients can
//! bubble them up with consistent context.

use game_core::{BattleError, ErrorSeverity, GameError, Side};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{side} skill selector not set")]
    SelectorNotSet { side: Side },

    #[error(transparent)]
    Battle(#[from] BattleError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SelectorNotSet { .. } => ErrorSeverity::Fatal,
            Self::Battle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SelectorNotSet { .. } => "RUNTIME_SELECTOR_NOT_SET",
            Self::Battle(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::CharacterError;

    #[test]
    fn severity_and_code_per_variant() {
        let cases = [
            (
                RuntimeError::SelectorNotSet { side: Side::First },
                ErrorSeverity::Fatal,
                "RUNTIME_SELECTOR_NOT_SET",
            ),
            (
                RuntimeError::from(BattleError::BattleOver),
                ErrorSeverity::Recoverable,
                "BATTLE_OVER",
            ),
            (
                RuntimeError::from(BattleError::from(CharacterError::SkillNotFound(
                    "Volley".into(),
                ))),
                ErrorSeverity::Validation,
                "SKILL_NOT_FOUND",
            ),
        ];

        for (error, severity, code) in cases {
            assert_eq!(error.severity(), severity, "{error}");
            assert_eq!(error.error_code(), code);
        }
    }
}

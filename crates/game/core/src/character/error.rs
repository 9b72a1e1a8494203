//! Character operation errors.

use crate::attribute::AttributeKind;
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

/// Errors surfaced by character operations.
///
/// Every variant is raised before any attribute or effect is mutated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterError {
    /// The character has no attribute of this kind.
    #[error("attribute '{0}' not found")]
    AttributeNotFound(AttributeKind),

    /// The character knows no skill with this name.
    #[error("skill '{0}' not found")]
    SkillNotFound(String),

    /// The character already knows the maximum number of skills.
    #[error("skill limit reached ({capacity} skills)")]
    SkillCapacityExceeded { capacity: usize },

    /// None of the skill's admitted classes match the character.
    #[error("skill '{skill}' can't be used by this character")]
    SkillIneligible { skill: String },
}

impl CharacterError {
    pub fn capacity_exceeded() -> Self {
        Self::SkillCapacityExceeded {
            capacity: GameConfig::MAX_SKILLS,
        }
    }
}

impl GameError for CharacterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AttributeNotFound(_) => ErrorSeverity::Internal,
            Self::SkillNotFound(_) | Self::SkillIneligible { .. } => ErrorSeverity::Validation,
            Self::SkillCapacityExceeded { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AttributeNotFound(_) => "ATTRIBUTE_NOT_FOUND",
            Self::SkillNotFound(_) => "SKILL_NOT_FOUND",
            Self::SkillCapacityExceeded { .. } => "SKILL_CAPACITY_EXCEEDED",
            Self::SkillIneligible { .. } => "SKILL_INELIGIBLE",
        }
    }
}

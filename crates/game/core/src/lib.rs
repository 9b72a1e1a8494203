//! Deterministic combat rules shared across the arena crates.
//!
//! `game-core` defines characters, their attributes, skills and timed effects,
//! experience progression and the two-combatant [`BattleSystem`]. Everything
//! here is pure and synchronous: no I/O, no logging, and randomness only
//! through an injected [`RngOracle`]. Supporting crates depend on the types
//! re-exported here.
pub mod attribute;
pub mod battle;
pub mod character;
pub mod config;
pub mod effect;
pub mod error;
pub mod experience;
pub mod rng;
pub mod skill;
pub mod snapshot;

pub use attribute::{Attribute, AttributeKind, AttributePreset, AttributeSet, AttributeTable};
pub use battle::{BattleError, BattleOutcome, BattleSystem, Side, TurnReport};
pub use character::{
    Character, CharacterError, CharacterKind, CharacterKinds, DefaultLevelUpPolicy, EffectPass,
    LevelUpPolicy,
};
pub use config::GameConfig;
pub use effect::{Effect, EffectKind};
pub use error::{ErrorSeverity, GameError};
pub use experience::{ExperienceSystem, LevelCurve, LevelUpEvent};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use skill::{Hit, RANDOM_ATTACK_NAMES, Skill, SkillBehavior, SkillKind, SkillOutcome};
pub use snapshot::{
    AttributeSnapshot, CharacterSnapshot, EffectSnapshot, ExperienceSnapshot, SkillSnapshot,
    SnapshotError,
};

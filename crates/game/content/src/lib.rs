//! Data-driven arena content and loaders.
//!
//! This crate houses static content and provides loaders for RON/TOML data files:
//! - Archetype factories (wizard / warrior / archer starter sets)
//! - Skill catalogs (data-driven via RON)
//! - Character rosters (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

pub mod archetypes;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use archetypes::CharacterFactory;

#[cfg(feature = "loaders")]
pub use loaders::{
    CharacterSpec, ConfigLoader, ContentFactory, EffectSpec, Roster, RosterLoader, SkillCatalog,
    SkillLoader, SkillSpec,
};

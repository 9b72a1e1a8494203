//! Battle orchestration on top of the deterministic game core.
//!
//! This crate wires skill selection, effect ticking, mana regeneration and
//! experience awards around [`game_core::BattleSystem`]. Consumers build a
//! [`BattleRunner`], hand it two characters, and receive a [`BattleSummary`]
//! with the full event log.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the selector abstraction and error types
//! - [`events`] defines the battle log
//! - [`runner`] hosts the battle loop and its builder
pub mod api;
pub mod events;
pub mod runner;

pub use api::{
    FirstSkillSelector, RandomSelector, Result, RuntimeError, ScriptedSelector, SkillSelector,
};
pub use events::{BattleEvent, BattleResult, BattleSummary};
pub use runner::{BattleRunner, BattleRunnerBuilder, RunnerConfig};

//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the runner can stay focused on orchestration.

pub mod errors;
pub mod selectors;

pub use errors::{Result, RuntimeError};
pub use selectors::{FirstSkillSelector, RandomSelector, ScriptedSelector, SkillSelector};

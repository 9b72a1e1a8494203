//! Arena client library.
//!
//! Hosts the pieces of the `dungeon` binary that are worth testing on their
//! own: environment configuration and battle assembly.
pub mod arena;
pub mod config;

pub use arena::{ArenaReport, load_snapshot, run_battle, save_snapshot};
pub use config::ArenaConfig;

//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`CharacterError`, `BattleError`, `SnapshotError`)
//! are defined next to the operations that raise them. All of them are local
//! and recoverable; the core never retries and never logs.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may pick an alternative action
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistencies that require investigation
/// - **Fatal**: the character or battle can no longer be used
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with an alternative action.
    ///
    /// Examples: skill limit reached, battle already over
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown skill name, ineligible skill, malformed snapshot
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: a character missing one of its attributes
    Internal,

    /// Fatal error - cannot continue.
    Fatal,
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

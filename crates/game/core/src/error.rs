//! Common error infrastructure for arpg-core.
//!
//! Guarded refusals (a skill on cooldown, an unaffordable cast) are expected
//! runtime outcomes and surface as `bool` returns on the character API. The
//! error types here describe *why* such a refusal happened, and report the few
//! structural faults the core can detect (time running backwards, duplicate
//! registry entries, writing a derived bound).
//!
//! Domain-specific errors live beside the code that produces them:
//! [`ClockError`](crate::clock::ClockError), [`SkillError`](crate::skill::SkillError),
//! [`EquipError`](crate::character::EquipError), [`StatError`](crate::stats::StatError)
//! and [`OracleError`](crate::env::OracleError).

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Temporary conditions that may succeed later (cooldown, resources)
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors indicating corrupted simulation state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - may succeed on a later tick.
    ///
    /// Examples: skill on cooldown, not enough magic, no enemy in range
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown skill id, equipping a non-weapon
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - simulation state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all arpg-core errors.
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

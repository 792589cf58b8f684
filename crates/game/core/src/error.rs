//! Common error infrastructure for orlog-core.
//!
//! Round resolution itself is total and never fails. Errors only arise at the
//! boundaries where a collaborator hands the core something invalid: a die
//! slot that does not exist, a favor outside the loadout, a roll after the
//! last roll sub-phase. Domain-specific errors live next to the types they
//! guard ([`crate::dice::DiceError`], [`crate::state::StateError`]).

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The request may succeed later without changes (e.g. after a new round starts)
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors indicating corrupted match state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
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

    /// Returns true if this error indicates a collaborator or engine bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all orlog-core errors.
///
/// - All error enums implement this trait
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(!ErrorSeverity::Validation.is_internal());
        assert_eq!(ErrorSeverity::Internal.as_str(), "internal");
    }
}

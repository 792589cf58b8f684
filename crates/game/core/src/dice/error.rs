use crate::error::{ErrorSeverity, GameError};

/// Errors raised by dice pool operations.
///
/// An out-of-range slot means the caller (UI or AI policy) is out of sync
/// with the pool, so the operation is rejected rather than clamped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiceError {
    #[error("die index {index} is out of range for a pool of {len} dice")]
    IndexOutOfRange { index: usize, len: usize },
}

impl GameError for DiceError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            DiceError::IndexOutOfRange { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            DiceError::IndexOutOfRange { .. } => "DICE_INDEX_OUT_OF_RANGE",
        }
    }
}

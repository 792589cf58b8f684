//! Match state errors.
//!
//! Errors raised when a collaborator asks the state to do something the rules
//! forbid: picking a favor outside the loadout, rolling past the last roll
//! sub-phase, or changing a loadout that is already fixed.

use crate::error::{ErrorSeverity, GameError};
use crate::favor::{InvalidTier, Tier};

use super::Seat;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    #[error("{seat} has not selected a loadout")]
    LoadoutMissing { seat: Seat },

    #[error("{seat} already has a loadout for this match")]
    LoadoutAlreadySet { seat: Seat },

    #[error("a loadout needs exactly {expected} favors, got {actual}")]
    LoadoutSize { expected: usize, actual: usize },

    #[error("favor '{name}' appears more than once in the loadout")]
    DuplicateFavor { name: String },

    #[error("favor '{name}' is not in {seat}'s loadout")]
    FavorNotInLoadout { seat: Seat, name: String },

    #[error("tier index {index} is out of range")]
    InvalidTier { index: u8 },

    #[error("{seat} cannot afford '{name}' at {tier}: needs {cost}, has {available}")]
    Unaffordable {
        seat: Seat,
        name: String,
        tier: Tier,
        cost: u32,
        available: u32,
    },

    #[error("all {limit} rolls of round {round} have been used")]
    RollsExhausted { round: u32, limit: u32 },

    #[error("the match is over")]
    GameOver,
}

impl From<InvalidTier> for StateError {
    fn from(err: InvalidTier) -> Self {
        StateError::InvalidTier { index: err.0 }
    }
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        use StateError::*;
        match self {
            // Too poor now, but tokens may arrive in a later round
            Unaffordable { .. } => ErrorSeverity::Recoverable,

            // Collaborator sent invalid input
            LoadoutMissing { .. }
            | LoadoutAlreadySet { .. }
            | LoadoutSize { .. }
            | DuplicateFavor { .. }
            | FavorNotInLoadout { .. }
            | InvalidTier { .. }
            | RollsExhausted { .. }
            | GameOver => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            LoadoutMissing { .. } => "LOADOUT_MISSING",
            LoadoutAlreadySet { .. } => "LOADOUT_ALREADY_SET",
            LoadoutSize { .. } => "LOADOUT_SIZE",
            DuplicateFavor { .. } => "DUPLICATE_FAVOR",
            FavorNotInLoadout { .. } => "FAVOR_NOT_IN_LOADOUT",
            InvalidTier { .. } => "INVALID_TIER",
            Unaffordable { .. } => "UNAFFORDABLE",
            RollsExhausted { .. } => "ROLLS_EXHAUSTED",
            GameOver => "GAME_OVER",
        }
    }
}

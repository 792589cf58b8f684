//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the match state, dice pools, repositories and decision
//! providers so clients can bubble them up with consistent context.
use thiserror::Error;

use orlog_core::{DiceError, Seat, StateError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("decision provider for {seat} not set")]
    ProviderNotSet { seat: Seat },

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Dice(#[from] DiceError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("session has no state repository configured")]
    RepositoryNotSet,
}

//! Authoritative match state.
//!
//! Players, the round/roll counters and the bounded event log live here.
//! Callers own a [`MatchState`] between rounds and hand it to the resolution
//! engine by exclusive reference for the duration of one round.
mod error;
mod log;
mod match_state;
mod player;
mod seat;
mod summary;

pub use error::StateError;
pub use log::{EventLog, LogEntry};
pub use match_state::{MatchOutcome, MatchState};
pub use player::{Loadout, PlayerState};
pub use seat::Seat;
pub use summary::{RoundSummary, SideTally};

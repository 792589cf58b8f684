//! Deterministic Orlog rules shared across the runtime and tools.
//!
//! `orlog-core` defines the face vocabulary, dice pools, favor definitions and
//! match state, and exposes a pure round-resolution engine. All round outcomes
//! flow through [`engine::RoundEngine`]; supporting crates depend on the types
//! re-exported here.
pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod face;
pub mod favor;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use dice::{DiceError, DicePool, Die};
pub use engine::{
    EffectOutcome, FaceCounts, FavorActivation, ResolutionStage, RoundEngine, RoundReport,
    SkippedFavor, resolve_round,
};
pub use error::{ErrorSeverity, GameError};
pub use face::{Face, FaceCategory};
pub use favor::{EffectKind, FavorChoice, FavorDefinition, FavorPhase, InvalidTier, Tier};
pub use rng::{PcgRng, RngOracle, RollKey, roll_seed};
pub use state::{
    EventLog, LogEntry, Loadout, MatchOutcome, MatchState, PlayerState, RoundSummary, Seat,
    SideTally, StateError,
};

//! Session orchestration for Orlog matches.
//!
//! This crate drives a match from loadout selection to the final round. It
//! asks a [`DecisionProvider`] per seat for every decision, hands dice to the
//! pure round engine in `orlog-core`, and persists snapshots through a
//! [`StateRepository`].
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the match driver and its builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`providers`] contains the built-in AI player
//! - [`repository`] stores match snapshots in memory or on disk
pub mod api;
pub mod providers;
pub mod repository;
pub mod session;

pub use api::{DecisionProvider, FavorPick, PassiveProvider, Result, RuntimeError};
pub use providers::GreedyAiProvider;
pub use repository::{
    FileStateRepository, InMemoryStateRepo, RepositoryError, StateRepository,
};
pub use session::{MatchResult, MatchSession, RuntimeConfig, SessionBuilder};

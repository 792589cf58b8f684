//! Public runtime API surface.
//!
//! Gathers the types exposed to consumers of the runtime crate so the session
//! driver and provider implementations can stay focused on orchestration.

pub mod errors;
pub mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{DecisionProvider, FavorPick, PassiveProvider};

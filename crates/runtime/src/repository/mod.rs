//! Repository layer for match snapshots.
//!
//! Repositories persist data that CHANGES during play: the full
//! [`orlog_core::MatchState`] after each resolved round. Static content (the
//! favor catalog, configuration) comes from `orlog-content` instead.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileStateRepository;
pub use memory::InMemoryStateRepo;
pub use traits::StateRepository;

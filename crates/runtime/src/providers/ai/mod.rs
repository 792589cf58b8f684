//! Greedy AI opponent.
//!
//! Three small policies, each a pure function of the visible match state:
//!
//! 1. **Loadout** ([`loadout`]): damage favors first, then the lowest priority
//! 2. **Locks** ([`locks`]): hold gold, then steal or the stronger attack,
//!    then whichever defense last round showed was short
//! 3. **Favor** ([`favor`]): score every affordable (favor, tier) pair and
//!    take the best one
//!
//! # Core Components
//!
//! - [`GreedyAiProvider`]: Main AI provider implementing [`crate::DecisionProvider`]
//! - [`AiContext`]: Shared view of the acting seat, its opponent and the match

pub mod context;
pub mod favor;
pub mod loadout;
pub mod locks;
pub mod provider;

pub use context::AiContext;
pub use favor::FavorScorer;
pub use provider::GreedyAiProvider;

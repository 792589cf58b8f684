//! Abstraction for sourcing player decisions.
//!
//! Session users plug in [`DecisionProvider`] implementations so a match can
//! run with scripted fixtures, AI policies or an interactive front end.
use orlog_content::FavorCatalog;
use orlog_core::{FavorDefinition, GameConfig, MatchState, Seat, Tier};

use super::errors::Result;

/// A favor pick for the current round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FavorPick {
    pub name: String,
    pub tier: Tier,
}

impl FavorPick {
    pub fn new(name: impl Into<String>, tier: Tier) -> Self {
        Self {
            name: name.into(),
            tier,
        }
    }
}

/// Trait for providing a player's decisions based on the current match state.
///
/// Different implementations can handle:
/// - Player input (from UI/CLI)
/// - AI decisions
/// - Scripted/replayed decisions
/// - Testing fixtures
pub trait DecisionProvider: Send + Sync {
    /// Pick the favors this seat brings into the match. Called once.
    fn choose_loadout(
        &self,
        seat: Seat,
        state: &MatchState,
        catalog: &FavorCatalog,
    ) -> Result<Vec<FavorDefinition>>;

    /// Dice slots to hold before the next roll. Slots not listed are rolled.
    fn plan_locks(&self, seat: Seat, state: &MatchState) -> Result<Vec<usize>>;

    /// Favor to use this round, if any. Called after the last roll.
    fn choose_favor(&self, seat: Seat, state: &MatchState) -> Result<Option<FavorPick>>;
}

/// A provider that never locks dice or uses favors.
/// Useful for testing or as a fallback.
pub struct PassiveProvider;

impl DecisionProvider for PassiveProvider {
    fn choose_loadout(
        &self,
        _seat: Seat,
        _state: &MatchState,
        catalog: &FavorCatalog,
    ) -> Result<Vec<FavorDefinition>> {
        Ok(catalog
            .iter()
            .take(GameConfig::LOADOUT_SIZE)
            .cloned()
            .collect())
    }

    fn plan_locks(&self, _seat: Seat, _state: &MatchState) -> Result<Vec<usize>> {
        Ok(Vec::new())
    }

    fn choose_favor(&self, _seat: Seat, _state: &MatchState) -> Result<Option<FavorPick>> {
        Ok(None)
    }
}

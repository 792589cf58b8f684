//! Greedy AI decision provider.

use orlog_content::FavorCatalog;
use orlog_core::{FavorDefinition, MatchState, Seat};

use super::{AiContext, FavorScorer, loadout, locks};
use crate::api::{DecisionProvider, FavorPick, Result};

/// Greedy AI provider.
///
/// Each decision is a pure function of the match state, so two sessions
/// started from the same seed play out identically.
#[derive(Debug, Clone, Default)]
pub struct GreedyAiProvider;

impl GreedyAiProvider {
    pub fn new() -> Self {
        Self
    }
}

impl DecisionProvider for GreedyAiProvider {
    fn choose_loadout(
        &self,
        seat: Seat,
        _state: &MatchState,
        catalog: &FavorCatalog,
    ) -> Result<Vec<FavorDefinition>> {
        let favors = loadout::aggressive_loadout(catalog);
        tracing::debug!(
            "{} loadout: {:?}",
            seat,
            favors.iter().map(|f| f.name.as_str()).collect::<Vec<_>>()
        );
        Ok(favors)
    }

    fn plan_locks(&self, seat: Seat, state: &MatchState) -> Result<Vec<usize>> {
        Ok(locks::plan_locks(&AiContext::new(seat, state)))
    }

    fn choose_favor(&self, seat: Seat, state: &MatchState) -> Result<Option<FavorPick>> {
        Ok(FavorScorer::select(&AiContext::new(seat, state)).map(|(pick, _)| pick))
    }
}

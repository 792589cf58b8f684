//! Favor selection.
//!
//! Every affordable (favor, tier) pair in the loadout gets a flat score by
//! effect family; the highest score wins. Tiers are tried from the strongest
//! down and a later candidate must score strictly higher to replace the
//! current best, so ties keep the earlier loadout entry at its highest tier.

use orlog_core::{EffectKind, FavorDefinition, Tier};

use super::AiContext;
use crate::api::FavorPick;

pub struct FavorScorer;

impl FavorScorer {
    /// Selects the best affordable favor, or `None` when nothing is affordable
    /// or the seat has no loadout.
    pub fn select(ctx: &AiContext<'_>) -> Option<(FavorPick, u32)> {
        let me = ctx.me();
        let loadout = me.loadout()?;
        let mut best: Option<(FavorPick, u32)> = None;

        for favor in loadout.iter() {
            for tier in Tier::ALL.into_iter().rev() {
                if !favor.is_affordable(tier, me.tokens()) {
                    continue;
                }
                let score = Self::score(favor, tier, ctx);
                tracing::debug!(
                    "  Favor {} at {}: score={} (cost={})",
                    favor.name,
                    tier,
                    score,
                    favor.cost(tier)
                );
                if best.as_ref().is_none_or(|(_, top)| score > *top) {
                    best = Some((FavorPick::new(favor.name.clone(), tier), score));
                }
            }
        }

        if let Some((pick, score)) = &best {
            tracing::debug!(
                "FavorScorer: {} picks {} at {} (score={})",
                ctx.seat,
                pick.name,
                pick.tier,
                score
            );
        }
        best
    }

    pub fn score(favor: &FavorDefinition, tier: Tier, ctx: &AiContext<'_>) -> u32 {
        let magnitude = favor.magnitude(tier);
        match favor.effect {
            EffectKind::Damage => 100 + magnitude * 15,
            EffectKind::Heal => {
                let urgency = if ctx.is_behind_on_health() { 40 } else { 0 };
                urgency + magnitude * 10
            }
            EffectKind::GainTokens => 20 + magnitude * 5,
            _ => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orlog_content::FavorCatalog;
    use orlog_core::{GameConfig, Loadout, MatchState, Seat};

    fn state_with(names: [&str; 3], tokens: u32) -> MatchState {
        let catalog = FavorCatalog::standard();
        let favors = names
            .iter()
            .map(|name| catalog.get(name).cloned().unwrap())
            .collect();
        let mut state = MatchState::new(GameConfig::default(), 1, "AI", "Rival");
        state
            .set_loadout(Seat::One, Loadout::new(favors).unwrap())
            .unwrap();
        state.player_mut(Seat::One).add_tokens(tokens);
        state
    }

    #[test]
    fn prefers_damage_at_highest_affordable_tier() {
        let state = state_with(["Idun's Rejuvenation", "Thor's Strike", "Freyja's Plenty"], 9);
        let (pick, score) = FavorScorer::select(&AiContext::new(Seat::One, &state)).unwrap();
        assert_eq!(pick, FavorPick::new("Thor's Strike", Tier::TWO));
        assert_eq!(score, 100 + 5 * 15);
    }

    #[test]
    fn heal_gains_urgency_when_behind() {
        let mut state = state_with(["Idun's Rejuvenation", "Freyja's Plenty", "Vidar's Might"], 4);
        let ctx_score = |state: &MatchState| {
            FavorScorer::select(&AiContext::new(Seat::One, state))
                .map(|(pick, _)| pick.name)
        };
        // healthy: Freyja tier 2 (20 + 30) beats Idun tier 1 (20)
        assert_eq!(ctx_score(&state).as_deref(), Some("Freyja's Plenty"));

        state.player_mut(Seat::One).take_damage(5);
        // behind: Idun tier 1 scores 40 + 20
        assert_eq!(ctx_score(&state).as_deref(), Some("Idun's Rejuvenation"));
    }

    #[test]
    fn nothing_affordable_means_no_pick() {
        let state = state_with(["Thor's Strike", "Var's Bond", "Hel's Grip"], 3);
        assert!(FavorScorer::select(&AiContext::new(Seat::One, &state)).is_none());
    }
}

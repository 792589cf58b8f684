use std::fmt;

use crate::favor::{FavorPhase, Tier};
use crate::state::{RoundSummary, Seat};

use super::ResolutionStage;

/// What a single favor activation did to the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectOutcome {
    /// Health removed from the opponent.
    Damage(u32),
    /// Health restored to the actor, after the max-health cap.
    Healed(u32),
    TokensGained(u32),
    TokensStolen(u32),
    TokensDestroyed(u32),
    IconsAdded(u32),
    IconsRemoved(u32),
    /// Opponent's choice now resolves at this tier.
    TierLowered(Tier),
    /// Opponent's choice was reduced below the first tier and dropped.
    ChoiceCancelled,
    /// The effect had nothing to act on.
    NoEffect,
}

impl fmt::Display for EffectOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectOutcome::Damage(n) => write!(f, "{n} damage"),
            EffectOutcome::Healed(n) => write!(f, "healed {n}"),
            EffectOutcome::TokensGained(n) => write!(f, "+{n} tokens"),
            EffectOutcome::TokensStolen(n) => write!(f, "stole {n} tokens"),
            EffectOutcome::TokensDestroyed(n) => write!(f, "destroyed {n} tokens"),
            EffectOutcome::IconsAdded(n) => write!(f, "+{n} icons"),
            EffectOutcome::IconsRemoved(n) => write!(f, "removed {n} icons"),
            EffectOutcome::TierLowered(tier) => write!(f, "opponent favor lowered to {tier}"),
            EffectOutcome::ChoiceCancelled => f.write_str("opponent favor cancelled"),
            EffectOutcome::NoEffect => f.write_str("no effect"),
        }
    }
}

/// A favor that was paid for and applied during resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FavorActivation {
    pub seat: Seat,
    pub player: String,
    pub favor: String,
    pub tier: Tier,
    pub phase: FavorPhase,
    pub cost: u32,
    pub outcome: EffectOutcome,
}

impl fmt::Display for FavorActivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} used {} ({}, {} tokens): {}",
            self.player, self.favor, self.tier, self.cost, self.outcome
        )
    }
}

/// A chosen favor whose cost exceeded the balance when its phase was reached.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkippedFavor {
    pub seat: Seat,
    pub favor: String,
    pub cost: u32,
    pub available: u32,
}

/// Everything a resolution call produced, for display and logging layers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundReport {
    /// The round that was resolved (the state has already moved past it).
    pub round: u32,
    pub summary: RoundSummary,
    /// Base combat damage per attacking seat.
    pub melee_damage: [u32; 2],
    pub ranged_damage: [u32; 2],
    /// Health each seat actually lost to base combat.
    pub health_lost: [u32; 2],
    /// Tokens each seat took with steal faces.
    pub stolen: [u32; 2],
    /// Tokens each seat earned from gold faces.
    pub gold_income: [u32; 2],
    /// Net token change per seat across the whole resolution.
    pub token_delta: [i64; 2],
    pub activations: Vec<FavorActivation>,
    pub skipped: Vec<SkippedFavor>,
    pub stage: ResolutionStage,
}

impl RoundReport {
    pub fn activations_by(&self, seat: Seat) -> impl Iterator<Item = &FavorActivation> {
        self.activations.iter().filter(move |a| a.seat == seat)
    }
}

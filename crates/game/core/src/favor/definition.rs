use core::fmt;

use super::{EffectKind, Tier};

/// When a favor resolves relative to base combat.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FavorPhase {
    /// Before steal and damage; may mutate face counts.
    Pre,
    /// After damage has been applied.
    Post,
}

/// Immutable catalog entry describing one god favor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FavorDefinition {
    pub name: String,
    /// Token cost per tier.
    pub costs: [u32; Tier::COUNT],
    /// Effect magnitude per tier.
    pub magnitudes: [u32; Tier::COUNT],
    pub phase: FavorPhase,
    /// Lower applies first within a phase.
    pub priority: u32,
    pub effect: EffectKind,
}

impl FavorDefinition {
    pub fn new(
        name: impl Into<String>,
        costs: [u32; Tier::COUNT],
        magnitudes: [u32; Tier::COUNT],
        phase: FavorPhase,
        priority: u32,
        effect: EffectKind,
    ) -> Self {
        Self {
            name: name.into(),
            costs,
            magnitudes,
            phase,
            priority,
            effect,
        }
    }

    #[inline]
    pub fn cost(&self, tier: Tier) -> u32 {
        self.costs[tier.index()]
    }

    #[inline]
    pub fn magnitude(&self, tier: Tier) -> u32 {
        self.magnitudes[tier.index()]
    }

    /// Cheapest tier cost, i.e. the minimum balance needed to use the favor at all.
    pub fn min_cost(&self) -> u32 {
        self.costs.iter().copied().min().unwrap_or(0)
    }

    pub fn is_affordable(&self, tier: Tier, tokens: u32) -> bool {
        tokens >= self.cost(tier)
    }
}

impl fmt::Display for FavorDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}/{}/{}]",
            self.name, self.costs[0], self.costs[1], self.costs[2]
        )
    }
}

/// A player's favor pick for the current round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FavorChoice {
    pub favor: FavorDefinition,
    pub tier: Tier,
}

impl FavorChoice {
    pub fn new(favor: FavorDefinition, tier: Tier) -> Self {
        Self { favor, tier }
    }

    #[inline]
    pub fn cost(&self) -> u32 {
        self.favor.cost(self.tier)
    }

    #[inline]
    pub fn magnitude(&self) -> u32 {
        self.favor.magnitude(self.tier)
    }

    /// Priority within `phase`, or `None` when the favor belongs to the other phase.
    pub fn priority_in(&self, phase: FavorPhase) -> Option<u32> {
        (self.favor.phase == phase).then_some(self.favor.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FavorDefinition {
        FavorDefinition::new(
            "Test",
            [1, 2, 3],
            [4, 5, 6],
            FavorPhase::Pre,
            3,
            EffectKind::GainTokens,
        )
    }

    #[test]
    fn tier_lookup() {
        let favor = sample();
        assert_eq!(favor.cost(Tier::TWO), 2);
        assert_eq!(favor.magnitude(Tier::THREE), 6);
        assert_eq!(favor.min_cost(), 1);
        assert!(favor.is_affordable(Tier::THREE, 3));
        assert!(!favor.is_affordable(Tier::THREE, 2));
    }

    #[test]
    fn display_lists_costs() {
        assert_eq!(sample().to_string(), "Test [1/2/3]");
    }

    #[test]
    fn priority_only_in_own_phase() {
        let choice = FavorChoice::new(sample(), Tier::ONE);
        assert_eq!(choice.priority_in(FavorPhase::Pre), Some(3));
        assert_eq!(choice.priority_in(FavorPhase::Post), None);
        assert_eq!(choice.cost(), 1);
        assert_eq!(choice.magnitude(), 4);
    }
}

use std::collections::HashSet;

use crate::config::GameConfig;
use crate::dice::DicePool;
use crate::favor::{FavorChoice, FavorDefinition, Tier};

use super::{Seat, StateError};

/// The fixed set of favors a player brings into a match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loadout {
    favors: Vec<FavorDefinition>,
}

impl Loadout {
    /// Builds a loadout of exactly [`GameConfig::LOADOUT_SIZE`] distinct favors.
    pub fn new(favors: Vec<FavorDefinition>) -> Result<Self, StateError> {
        if favors.len() != GameConfig::LOADOUT_SIZE {
            return Err(StateError::LoadoutSize {
                expected: GameConfig::LOADOUT_SIZE,
                actual: favors.len(),
            });
        }
        let mut names = HashSet::new();
        for favor in &favors {
            if !names.insert(favor.name.as_str()) {
                return Err(StateError::DuplicateFavor {
                    name: favor.name.clone(),
                });
            }
        }
        Ok(Self { favors })
    }

    pub fn get(&self, name: &str) -> Option<&FavorDefinition> {
        self.favors.iter().find(|favor| favor.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FavorDefinition> {
        self.favors.iter()
    }

    pub fn as_slice(&self) -> &[FavorDefinition] {
        &self.favors
    }
}

/// Per-player match state.
///
/// Health never exceeds `max_health` and never drops below zero; the token
/// balance never goes negative. The favor choice lives for one round only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    seat: Seat,
    name: String,
    health: u32,
    max_health: u32,
    tokens: u32,
    dice: DicePool,
    loadout: Option<Loadout>,
    choice: Option<FavorChoice>,
}

impl PlayerState {
    pub fn new(seat: Seat, name: impl Into<String>, config: &GameConfig) -> Self {
        Self {
            seat,
            name: name.into(),
            health: config.max_health,
            max_health: config.max_health,
            tokens: 0,
            dice: DicePool::new(config.dice_per_player),
            loadout: None,
            choice: None,
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn tokens(&self) -> u32 {
        self.tokens
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    pub fn dice(&self) -> &DicePool {
        &self.dice
    }

    pub fn dice_mut(&mut self) -> &mut DicePool {
        &mut self.dice
    }

    // ===== resources =====

    pub fn add_tokens(&mut self, amount: u32) {
        self.tokens = self.tokens.saturating_add(amount);
    }

    /// Removes up to `amount` tokens and returns how many were actually removed.
    pub fn spend_tokens(&mut self, amount: u32) -> u32 {
        let spent = amount.min(self.tokens);
        self.tokens -= spent;
        spent
    }

    /// Applies damage clamped at zero health; returns the health actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.health);
        self.health -= dealt;
        dealt
    }

    /// Restores health capped at the maximum; returns the health actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_health.saturating_sub(self.health));
        self.health += healed;
        healed
    }

    // ===== favors =====

    pub fn loadout(&self) -> Option<&Loadout> {
        self.loadout.as_ref()
    }

    /// Fixes the loadout for the rest of the match.
    pub fn set_loadout(&mut self, loadout: Loadout) -> Result<(), StateError> {
        if self.loadout.is_some() {
            return Err(StateError::LoadoutAlreadySet { seat: self.seat });
        }
        self.loadout = Some(loadout);
        Ok(())
    }

    /// Picks a favor from the loadout for this round.
    ///
    /// The favor must be in the loadout and affordable right now. The engine
    /// re-checks affordability when the favor's phase is reached.
    pub fn choose_favor(&mut self, name: &str, tier: Tier) -> Result<(), StateError> {
        let loadout = self
            .loadout
            .as_ref()
            .ok_or(StateError::LoadoutMissing { seat: self.seat })?;
        let favor = loadout
            .get(name)
            .ok_or_else(|| StateError::FavorNotInLoadout {
                seat: self.seat,
                name: name.to_string(),
            })?;
        let cost = favor.cost(tier);
        if self.tokens < cost {
            return Err(StateError::Unaffordable {
                seat: self.seat,
                name: name.to_string(),
                tier,
                cost,
                available: self.tokens,
            });
        }
        self.choice = Some(FavorChoice::new(favor.clone(), tier));
        Ok(())
    }

    pub fn choice(&self) -> Option<&FavorChoice> {
        self.choice.as_ref()
    }

    pub fn clear_choice(&mut self) {
        self.choice = None;
    }

    /// Replaces the choice without loadout or affordability checks.
    pub(crate) fn set_choice(&mut self, choice: Option<FavorChoice>) {
        self.choice = choice;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favor::{EffectKind, FavorPhase};

    fn favor(name: &str, costs: [u32; 3]) -> FavorDefinition {
        FavorDefinition::new(name, costs, [1, 2, 3], FavorPhase::Post, 1, EffectKind::Damage)
    }

    fn loadout() -> Loadout {
        Loadout::new(vec![
            favor("A", [1, 2, 3]),
            favor("B", [2, 4, 6]),
            favor("C", [5, 5, 5]),
        ])
        .unwrap()
    }

    fn player() -> PlayerState {
        PlayerState::new(Seat::One, "Tester", &GameConfig::default())
    }

    #[test]
    fn tokens_add_and_spend_clamps_at_zero() {
        let mut p = player();
        p.add_tokens(5);
        assert_eq!(p.tokens(), 5);
        assert_eq!(p.spend_tokens(3), 3);
        assert_eq!(p.tokens(), 2);
        assert_eq!(p.spend_tokens(10), 2);
        assert_eq!(p.tokens(), 0);
    }

    #[test]
    fn damage_clamps_and_heal_caps() {
        let mut p = player();
        assert_eq!(p.take_damage(4), 4);
        assert_eq!(p.health(), 11);
        assert_eq!(p.heal(3), 3);
        assert_eq!(p.health(), 14);
        assert_eq!(p.heal(20), 1);
        assert_eq!(p.health(), 15);
        assert_eq!(p.take_damage(20), 15);
        assert_eq!(p.health(), 0);
        assert!(p.is_defeated());
    }

    #[test]
    fn loadout_requires_three_distinct_favors() {
        assert_eq!(
            Loadout::new(vec![favor("A", [1, 1, 1])]),
            Err(StateError::LoadoutSize {
                expected: 3,
                actual: 1
            })
        );
        assert_eq!(
            Loadout::new(vec![
                favor("A", [1, 1, 1]),
                favor("A", [1, 1, 1]),
                favor("B", [1, 1, 1])
            ]),
            Err(StateError::DuplicateFavor { name: "A".into() })
        );
    }

    #[test]
    fn loadout_is_fixed_once_set() {
        let mut p = player();
        p.set_loadout(loadout()).unwrap();
        assert_eq!(
            p.set_loadout(loadout()),
            Err(StateError::LoadoutAlreadySet { seat: Seat::One })
        );
    }

    #[test]
    fn choose_favor_validates_membership_and_cost() {
        let mut p = player();
        assert!(matches!(
            p.choose_favor("A", Tier::ONE),
            Err(StateError::LoadoutMissing { .. })
        ));

        p.set_loadout(loadout()).unwrap();
        p.add_tokens(2);
        assert!(matches!(
            p.choose_favor("Z", Tier::ONE),
            Err(StateError::FavorNotInLoadout { .. })
        ));
        assert!(matches!(
            p.choose_favor("A", Tier::THREE),
            Err(StateError::Unaffordable { cost: 3, available: 2, .. })
        ));

        p.choose_favor("A", Tier::TWO).unwrap();
        let choice = p.choice().unwrap();
        assert_eq!(choice.favor.name, "A");
        assert_eq!(choice.tier, Tier::TWO);

        p.clear_choice();
        assert!(p.choice().is_none());
    }
}

//! The favor catalog.
//!
//! A catalog is an immutable, validated list of favor definitions. The
//! standard catalog is built once per process and shared by reference.

use std::collections::HashSet;
use std::sync::LazyLock;

use orlog_core::{EffectKind, FavorDefinition, FavorPhase, Tier};

/// Reasons a list of favors cannot form a catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("favor catalog is empty")]
    Empty,

    #[error("favor '{0}' is defined more than once")]
    DuplicateName(String),

    #[error("favor '{name}' has decreasing tier costs {costs:?}")]
    DecreasingCost { name: String, costs: [u32; Tier::COUNT] },

    #[error("favor '{name}' uses {effect} in the {phase} phase")]
    PhaseMismatch {
        name: String,
        effect: EffectKind,
        phase: FavorPhase,
    },

    #[error("favor '{name}' scales melee by {magnitudes:?} percent; every tier needs at least 100")]
    MeleePercentBelowHundred {
        name: String,
        magnitudes: [u32; Tier::COUNT],
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FavorCatalog {
    favors: Vec<FavorDefinition>,
}

impl FavorCatalog {
    /// Validates and wraps a list of favors.
    ///
    /// Names must be unique, costs non-decreasing by tier, and each favor's
    /// phase must be the one its effect reads its inputs in. Melee multipliers
    /// are percentages of at least 100.
    pub fn new(favors: Vec<FavorDefinition>) -> Result<Self, CatalogError> {
        if favors.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut names = HashSet::new();
        for favor in &favors {
            if !names.insert(favor.name.as_str()) {
                return Err(CatalogError::DuplicateName(favor.name.clone()));
            }
            if favor.costs.windows(2).any(|pair| pair[0] > pair[1]) {
                return Err(CatalogError::DecreasingCost {
                    name: favor.name.clone(),
                    costs: favor.costs,
                });
            }
            if favor.phase != favor.effect.natural_phase() {
                return Err(CatalogError::PhaseMismatch {
                    name: favor.name.clone(),
                    effect: favor.effect,
                    phase: favor.phase,
                });
            }
            if favor.effect == EffectKind::MultiplyMelee
                && favor.magnitudes.iter().any(|&percent| percent < 100)
            {
                return Err(CatalogError::MeleePercentBelowHundred {
                    name: favor.name.clone(),
                    magnitudes: favor.magnitudes,
                });
            }
        }
        Ok(Self { favors })
    }

    /// The built-in catalog, constructed on first use.
    pub fn standard() -> &'static FavorCatalog {
        &STANDARD
    }

    pub fn get(&self, name: &str) -> Option<&FavorDefinition> {
        self.favors.iter().find(|favor| favor.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FavorDefinition> {
        self.favors.iter()
    }

    pub fn as_slice(&self) -> &[FavorDefinition] {
        &self.favors
    }

    pub fn len(&self) -> usize {
        self.favors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favors.is_empty()
    }
}

// (name, costs, magnitudes, priority, effect)
type FavorRow = (&'static str, [u32; 3], [u32; 3], u32, EffectKind);

#[rustfmt::skip]
const STANDARD_FAVORS: [FavorRow; 20] = [
    // pre-combat
    ("Thrymr's Theft",          [3, 6, 9],    [1, 2, 3],       1, EffectKind::ReduceOppFavorLevel),
    ("Frigg's Sight",           [2, 3, 4],    [1, 2, 3],       2, EffectKind::BanOppDice),
    ("Loki's Trick",            [3, 6, 9],    [1, 2, 3],       2, EffectKind::BanOppDice),
    ("Hermod's Toll",           [3, 5, 7],    [2, 4, 6],       3, EffectKind::StealTokens),
    ("Freyja's Plenty",         [2, 4, 6],    [3, 6, 9],       3, EffectKind::GainTokens),
    ("Skuld's Claim",           [4, 6, 8],    [2, 3, 4],       3, EffectKind::DestroyOppTokensPerArrow),
    ("Vidar's Might",           [2, 4, 6],    [2, 4, 6],       4, EffectKind::RemoveOppHelmets),
    ("Ullr's Aim",              [2, 3, 4],    [2, 3, 6],       4, EffectKind::IgnoreOppRangedBlocks),
    ("Baldr's Invulnerability", [3, 6, 9],    [1, 2, 3],       4, EffectKind::DoubleBlocks),
    ("Skadi's Hunt",            [6, 10, 14],  [1, 2, 3],       4, EffectKind::BonusPerRanged),
    ("Brunhild's Fury",         [6, 10, 18],  [150, 200, 300], 4, EffectKind::MultiplyMelee),
    ("Freyr's Gift",            [4, 6, 8],    [2, 3, 4],       4, EffectKind::BonusMajority),
    // post-combat
    ("Var's Bond",              [10, 14, 18], [1, 2, 3],       1, EffectKind::HealPerOppFavorSpent),
    ("Thor's Strike",           [4, 8, 12],   [2, 5, 8],       6, EffectKind::Damage),
    ("Idun's Rejuvenation",     [4, 7, 10],   [2, 4, 6],       7, EffectKind::Heal),
    ("Odin's Sacrifice",        [6, 8, 10],   [3, 4, 5],       7, EffectKind::Heal),
    ("Heimdall's Watch",        [4, 7, 10],   [1, 2, 3],       7, EffectKind::HealPerBlocked),
    ("Hel's Grip",              [6, 12, 18],  [1, 2, 3],       7, EffectKind::HealPerIncomingMelee),
    ("Mimir's Wisdom",          [3, 5, 7],    [1, 2, 3],       7, EffectKind::TokensPerDamageTaken),
    ("Bragi's Verve",           [4, 8, 12],   [2, 3, 4],       7, EffectKind::TokensPerSteal),
];

static STANDARD: LazyLock<FavorCatalog> = LazyLock::new(|| FavorCatalog {
    favors: STANDARD_FAVORS
        .iter()
        .map(|&(name, costs, magnitudes, priority, effect)| {
            FavorDefinition::new(name, costs, magnitudes, effect.natural_phase(), priority, effect)
        })
        .collect(),
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_is_valid() {
        let catalog = FavorCatalog::standard();
        assert_eq!(catalog.len(), 20);
        assert_eq!(FavorCatalog::new(catalog.as_slice().to_vec()).as_ref(), Ok(catalog));
    }

    #[test]
    fn standard_catalog_covers_every_effect() {
        let catalog = FavorCatalog::standard();
        for effect in EffectKind::ALL {
            assert!(
                catalog.iter().any(|favor| favor.effect == effect),
                "no favor uses {effect}"
            );
        }
    }

    #[test]
    fn known_entries() {
        let catalog = FavorCatalog::standard();
        let vidar = catalog.get("Vidar's Might").unwrap();
        assert_eq!(vidar.cost(Tier::ONE), 2);
        assert_eq!(vidar.phase, FavorPhase::Pre);

        let thor = catalog.get("Thor's Strike").unwrap();
        assert_eq!(thor.cost(Tier::ONE), 4);
        assert_eq!(thor.magnitude(Tier::ONE), 2);
        assert!(catalog.get("Tyr's Pledge").is_none());
    }

    #[test]
    fn validation_rejects_bad_entries() {
        let good = FavorCatalog::standard().as_slice()[0].clone();

        assert_eq!(FavorCatalog::new(vec![]), Err(CatalogError::Empty));
        assert_eq!(
            FavorCatalog::new(vec![good.clone(), good.clone()]),
            Err(CatalogError::DuplicateName(good.name.clone()))
        );

        let mut cheaper = good.clone();
        cheaper.costs = [5, 3, 7];
        assert!(matches!(
            FavorCatalog::new(vec![cheaper]),
            Err(CatalogError::DecreasingCost { .. })
        ));

        let mut misplaced = good;
        misplaced.phase = FavorPhase::Post;
        assert!(matches!(
            FavorCatalog::new(vec![misplaced]),
            Err(CatalogError::PhaseMismatch { .. })
        ));
    }

    #[test]
    fn melee_multiplier_below_hundred_percent_is_rejected() {
        let mut fury = FavorCatalog::standard()
            .get("Brunhild's Fury")
            .cloned()
            .unwrap();
        fury.magnitudes = [50, 150, 200];
        assert_eq!(
            FavorCatalog::new(vec![fury.clone()]),
            Err(CatalogError::MeleePercentBelowHundred {
                name: fury.name.clone(),
                magnitudes: [50, 150, 200],
            })
        );

        fury.magnitudes = [100, 150, 200];
        assert!(FavorCatalog::new(vec![fury]).is_ok());
    }
}

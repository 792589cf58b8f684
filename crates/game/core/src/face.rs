//! Die face vocabulary.
//!
//! Every face belongs to exactly one [`FaceCategory`] and carries an
//! independent gold flag. The set is closed and enumerated in [`Face::ALL`].

/// Symbol category shown on a die face, ignoring the gold modifier.
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
pub enum FaceCategory {
    /// Axe: melee attack, blocked by shields.
    Melee,
    /// Arrow: ranged attack, blocked by helmets.
    Ranged,
    Shield,
    Helmet,
    /// Hand: steals favor tokens from the opponent.
    Steal,
}

impl FaceCategory {
    /// All categories in majority tie-break precedence order.
    pub const ALL: [FaceCategory; 5] = [
        FaceCategory::Melee,
        FaceCategory::Ranged,
        FaceCategory::Helmet,
        FaceCategory::Shield,
        FaceCategory::Steal,
    ];

    /// The base (non-gold) face of this category.
    pub const fn base(self) -> Face {
        Face::new(self, false)
    }

    /// The gold face of this category.
    pub const fn gold(self) -> Face {
        Face::new(self, true)
    }

    pub const fn is_attack(self) -> bool {
        matches!(self, FaceCategory::Melee | FaceCategory::Ranged)
    }

    pub const fn is_defense(self) -> bool {
        matches!(self, FaceCategory::Shield | FaceCategory::Helmet)
    }
}

/// A single die face.
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
pub enum Face {
    Melee,
    MeleeGold,
    Ranged,
    RangedGold,
    Shield,
    ShieldGold,
    Helmet,
    HelmetGold,
    Steal,
    StealGold,
}

impl Face {
    pub const COUNT: usize = 10;

    /// Every face, in declaration order. Dice draw uniformly from this set.
    pub const ALL: [Face; Self::COUNT] = [
        Face::Melee,
        Face::MeleeGold,
        Face::Ranged,
        Face::RangedGold,
        Face::Shield,
        Face::ShieldGold,
        Face::Helmet,
        Face::HelmetGold,
        Face::Steal,
        Face::StealGold,
    ];

    pub const fn new(category: FaceCategory, gold: bool) -> Self {
        match (category, gold) {
            (FaceCategory::Melee, false) => Face::Melee,
            (FaceCategory::Melee, true) => Face::MeleeGold,
            (FaceCategory::Ranged, false) => Face::Ranged,
            (FaceCategory::Ranged, true) => Face::RangedGold,
            (FaceCategory::Shield, false) => Face::Shield,
            (FaceCategory::Shield, true) => Face::ShieldGold,
            (FaceCategory::Helmet, false) => Face::Helmet,
            (FaceCategory::Helmet, true) => Face::HelmetGold,
            (FaceCategory::Steal, false) => Face::Steal,
            (FaceCategory::Steal, true) => Face::StealGold,
        }
    }

    pub const fn category(self) -> FaceCategory {
        match self {
            Face::Melee | Face::MeleeGold => FaceCategory::Melee,
            Face::Ranged | Face::RangedGold => FaceCategory::Ranged,
            Face::Shield | Face::ShieldGold => FaceCategory::Shield,
            Face::Helmet | Face::HelmetGold => FaceCategory::Helmet,
            Face::Steal | Face::StealGold => FaceCategory::Steal,
        }
    }

    /// True for the upgraded variant, which yields a favor token at resolution.
    pub const fn is_gold(self) -> bool {
        matches!(
            self,
            Face::MeleeGold | Face::RangedGold | Face::ShieldGold | Face::HelmetGold | Face::StealGold
        )
    }

    /// Dense index into [`Face::ALL`].
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    pub const fn is_attack_melee(self) -> bool {
        matches!(self.category(), FaceCategory::Melee)
    }

    pub const fn is_attack_ranged(self) -> bool {
        matches!(self.category(), FaceCategory::Ranged)
    }

    pub const fn is_shield(self) -> bool {
        matches!(self.category(), FaceCategory::Shield)
    }

    pub const fn is_helmet(self) -> bool {
        matches!(self.category(), FaceCategory::Helmet)
    }

    pub const fn is_steal(self) -> bool {
        matches!(self.category(), FaceCategory::Steal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_and_gold_are_orthogonal() {
        for face in Face::ALL {
            assert_eq!(Face::new(face.category(), face.is_gold()), face);
        }
        let gold = Face::ALL.iter().filter(|f| f.is_gold()).count();
        assert_eq!(gold, FaceCategory::ALL.len());
    }

    #[test]
    fn index_matches_declaration_order() {
        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(face.as_index(), i);
        }
    }

    #[test]
    fn predicates_cover_both_variants() {
        assert!(Face::MeleeGold.is_attack_melee());
        assert!(Face::Ranged.is_attack_ranged());
        assert!(Face::ShieldGold.is_shield());
        assert!(Face::Helmet.is_helmet());
        assert!(Face::StealGold.is_steal());
        assert!(!Face::Steal.is_gold());
        assert!(FaceCategory::Ranged.is_attack());
        assert!(FaceCategory::Helmet.is_defense());
    }

    #[test]
    fn parses_snake_case_names() {
        assert_eq!("melee_gold".parse::<Face>().ok(), Some(Face::MeleeGold));
        assert_eq!("HELMET".parse::<FaceCategory>().ok(), Some(FaceCategory::Helmet));
        assert_eq!(Face::StealGold.to_string(), "steal_gold");
    }
}

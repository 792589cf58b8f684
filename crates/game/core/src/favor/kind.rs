use super::FavorPhase;

/// Closed set of favor effects.
///
/// Magnitudes are read from the owning [`super::FavorDefinition`] at the
/// chosen tier; the variant only says what the magnitude means.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EffectKind {
    // ========================================================================
    // Health
    // ========================================================================
    /// Opponent loses `magnitude` health.
    Damage,
    /// Own health restored by `magnitude`, capped at the maximum.
    Heal,
    /// Heal `magnitude` per incoming attack blocked this round.
    HealPerBlocked,
    /// Heal `magnitude` per unblocked incoming melee icon.
    HealPerIncomingMelee,
    /// Heal `magnitude` per token the opponent's chosen favor costs.
    HealPerOppFavorSpent,

    // ========================================================================
    // Tokens
    // ========================================================================
    /// Own tokens += `magnitude`.
    GainTokens,
    /// Take up to `magnitude` tokens from the opponent.
    StealTokens,
    /// Opponent loses `magnitude` tokens per own ranged icon.
    DestroyOppTokensPerArrow,
    /// Own tokens += damage taken this round × `magnitude`.
    TokensPerDamageTaken,
    /// Own tokens += own steal icons × `magnitude`.
    TokensPerSteal,

    // ========================================================================
    // Face counts
    // ========================================================================
    /// Remove up to `magnitude` opponent helmet icons.
    RemoveOppHelmets,
    /// Remove up to `magnitude` opponent shield icons.
    IgnoreOppRangedBlocks,
    /// Each own shield/helmet count grows by `count × magnitude`.
    DoubleBlocks,
    /// Own ranged count grows by `magnitude × ranged`.
    BonusPerRanged,
    /// Own melee count scaled to `magnitude` percent.
    MultiplyMelee,
    /// `magnitude` extra icons on the own majority category.
    BonusMajority,
    /// Remove up to `magnitude` opponent attack/steal icons for this round.
    BanOppDice,

    // ========================================================================
    // Favor interference
    // ========================================================================
    /// Lower the opponent's chosen tier by `magnitude` steps.
    ReduceOppFavorLevel,
}

impl EffectKind {
    pub const COUNT: usize = 18;

    pub const ALL: [EffectKind; Self::COUNT] = [
        EffectKind::Damage,
        EffectKind::Heal,
        EffectKind::HealPerBlocked,
        EffectKind::HealPerIncomingMelee,
        EffectKind::HealPerOppFavorSpent,
        EffectKind::GainTokens,
        EffectKind::StealTokens,
        EffectKind::DestroyOppTokensPerArrow,
        EffectKind::TokensPerDamageTaken,
        EffectKind::TokensPerSteal,
        EffectKind::RemoveOppHelmets,
        EffectKind::IgnoreOppRangedBlocks,
        EffectKind::DoubleBlocks,
        EffectKind::BonusPerRanged,
        EffectKind::MultiplyMelee,
        EffectKind::BonusMajority,
        EffectKind::BanOppDice,
        EffectKind::ReduceOppFavorLevel,
    ];

    /// The phase in which this effect is meaningful.
    ///
    /// Count-mutating and token-interference effects must run before combat;
    /// effects that read combat results must run after it.
    pub const fn natural_phase(self) -> FavorPhase {
        match self {
            EffectKind::Damage
            | EffectKind::Heal
            | EffectKind::HealPerBlocked
            | EffectKind::HealPerIncomingMelee
            | EffectKind::HealPerOppFavorSpent
            | EffectKind::TokensPerDamageTaken
            | EffectKind::TokensPerSteal => FavorPhase::Post,

            EffectKind::GainTokens
            | EffectKind::StealTokens
            | EffectKind::DestroyOppTokensPerArrow
            | EffectKind::RemoveOppHelmets
            | EffectKind::IgnoreOppRangedBlocks
            | EffectKind::DoubleBlocks
            | EffectKind::BonusPerRanged
            | EffectKind::MultiplyMelee
            | EffectKind::BonusMajority
            | EffectKind::BanOppDice
            | EffectKind::ReduceOppFavorLevel => FavorPhase::Pre,
        }
    }
}

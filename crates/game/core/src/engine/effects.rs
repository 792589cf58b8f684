//! One handler per [`EffectKind`].
//!
//! Handlers receive the acting player, the opponent, and both face-count maps
//! by mutable reference. Every subtraction clamps at zero.

use crate::face::{Face, FaceCategory};
use crate::favor::{EffectKind, FavorChoice};
use crate::state::PlayerState;

use super::{EffectOutcome, FaceCounts};

/// Categories a dice ban strips from the opponent, in removal order.
const BANNED_CATEGORIES: [FaceCategory; 3] = [
    FaceCategory::Melee,
    FaceCategory::Ranged,
    FaceCategory::Steal,
];

/// Mutable view handed to an effect handler.
pub(crate) struct EffectContext<'a> {
    pub actor: &'a mut PlayerState,
    pub opponent: &'a mut PlayerState,
    pub own: &'a mut FaceCounts,
    pub theirs: &'a mut FaceCounts,
    /// Health the actor lost to base combat this round. Zero before combat.
    pub damage_taken: u32,
}

pub(crate) fn apply_effect(kind: EffectKind, magnitude: u32, ctx: EffectContext<'_>) -> EffectOutcome {
    let EffectContext {
        actor,
        opponent,
        own,
        theirs,
        damage_taken,
    } = ctx;

    match kind {
        EffectKind::Damage => EffectOutcome::Damage(opponent.take_damage(magnitude)),

        EffectKind::Heal => EffectOutcome::Healed(actor.heal(magnitude)),

        EffectKind::HealPerBlocked => {
            let blocked = theirs
                .melee()
                .min(own.helmets())
                .saturating_add(theirs.ranged().min(own.shields()));
            EffectOutcome::Healed(actor.heal(blocked.saturating_mul(magnitude)))
        }

        EffectKind::HealPerIncomingMelee => {
            let unblocked = theirs.melee().saturating_sub(own.helmets());
            EffectOutcome::Healed(actor.heal(unblocked.saturating_mul(magnitude)))
        }

        EffectKind::HealPerOppFavorSpent => {
            let spent = opponent.choice().map(FavorChoice::cost).unwrap_or(0);
            EffectOutcome::Healed(actor.heal(spent.saturating_mul(magnitude)))
        }

        EffectKind::GainTokens => {
            actor.add_tokens(magnitude);
            EffectOutcome::TokensGained(magnitude)
        }

        EffectKind::StealTokens => {
            let taken = opponent.spend_tokens(magnitude);
            actor.add_tokens(taken);
            EffectOutcome::TokensStolen(taken)
        }

        EffectKind::DestroyOppTokensPerArrow => {
            let destroyed = opponent.spend_tokens(own.ranged().saturating_mul(magnitude));
            EffectOutcome::TokensDestroyed(destroyed)
        }

        EffectKind::TokensPerDamageTaken => {
            let gained = damage_taken.saturating_mul(magnitude);
            actor.add_tokens(gained);
            EffectOutcome::TokensGained(gained)
        }

        EffectKind::TokensPerSteal => {
            let gained = own.steals().saturating_mul(magnitude);
            actor.add_tokens(gained);
            EffectOutcome::TokensGained(gained)
        }

        EffectKind::RemoveOppHelmets => {
            EffectOutcome::IconsRemoved(theirs.remove_up_to(FaceCategory::Helmet, magnitude))
        }

        EffectKind::IgnoreOppRangedBlocks => {
            EffectOutcome::IconsRemoved(theirs.remove_up_to(FaceCategory::Shield, magnitude))
        }

        EffectKind::DoubleBlocks => {
            let mut added = 0u32;
            for face in [Face::Shield, Face::ShieldGold, Face::Helmet, Face::HelmetGold] {
                let extra = own.get(face).saturating_mul(magnitude);
                own.add(face, extra);
                added = added.saturating_add(extra);
            }
            EffectOutcome::IconsAdded(added)
        }

        EffectKind::BonusPerRanged => {
            let extra = own.ranged().saturating_mul(magnitude);
            own.add(Face::Ranged, extra);
            EffectOutcome::IconsAdded(extra)
        }

        EffectKind::MultiplyMelee => {
            let extra = own.melee().saturating_mul(magnitude.saturating_sub(100)) / 100;
            own.add(Face::Melee, extra);
            EffectOutcome::IconsAdded(extra)
        }

        EffectKind::BonusMajority => {
            own.add(own.majority().base(), magnitude);
            EffectOutcome::IconsAdded(magnitude)
        }

        EffectKind::BanOppDice => {
            let mut removed = 0;
            for category in BANNED_CATEGORIES {
                removed += theirs.remove_up_to(category, magnitude - removed);
            }
            EffectOutcome::IconsRemoved(removed)
        }

        EffectKind::ReduceOppFavorLevel => {
            let Some(choice) = opponent.choice().cloned() else {
                return EffectOutcome::NoEffect;
            };
            match choice.tier.lowered_by(magnitude) {
                Some(tier) => {
                    opponent.set_choice(Some(FavorChoice::new(choice.favor, tier)));
                    EffectOutcome::TierLowered(tier)
                }
                None => {
                    opponent.set_choice(None);
                    EffectOutcome::ChoiceCancelled
                }
            }
        }
    }
}

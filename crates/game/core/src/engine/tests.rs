use proptest::prelude::*;

use super::*;
use crate::config::GameConfig;
use crate::face::Face::*;
use crate::favor::{EffectKind, FavorDefinition, Tier};
use crate::state::{Loadout, StateError};

fn favor(name: &str, effect: EffectKind, costs: [u32; 3], magnitudes: [u32; 3], priority: u32) -> FavorDefinition {
    FavorDefinition::new(name, costs, magnitudes, effect.natural_phase(), priority, effect)
}

fn filler(name: &str) -> FavorDefinition {
    favor(name, EffectKind::GainTokens, [1, 2, 3], [1, 2, 3], 9)
}

fn new_match() -> MatchState {
    MatchState::new(GameConfig::default(), 7, "Ragnar", "Bjorn")
}

/// Gives `seat` a loadout holding `featured` and lets it pick it at `tier`.
fn equip(state: &mut MatchState, seat: Seat, featured: FavorDefinition, tier: Tier) {
    let name = featured.name.clone();
    let loadout = Loadout::new(vec![featured, filler("Spare A"), filler("Spare B")]).unwrap();
    state.set_loadout(seat, loadout).unwrap();
    state.choose_favor(seat, &name, tier).unwrap();
}

fn roll(faces: &[Face]) -> Vec<Option<Face>> {
    faces.iter().copied().map(Some).collect()
}

#[test]
fn base_combat_without_favors() {
    let mut state = new_match();
    let report = resolve_round(&mut state, &roll(&[Melee, Melee, Ranged]), &roll(&[Shield]));

    assert_eq!(state.player(Seat::Two).health(), 13);
    assert_eq!(state.player(Seat::One).health(), 15);
    assert_eq!(state.player(Seat::One).tokens(), 0);
    assert_eq!(state.player(Seat::Two).tokens(), 0);

    assert_eq!(report.melee_damage, [1, 0]);
    assert_eq!(report.ranged_damage, [1, 0]);
    assert_eq!(report.summary.sides[0].damage, 2);
    assert_eq!(report.summary.sides[0].opponent_shields, 1);
    assert_eq!(report.stage, ResolutionStage::RoundClosed);
    assert_eq!(report.stage.as_str(), "round_closed");
}

#[test]
fn removing_helmets_before_combat_changes_damage() {
    let helmet_breaker = favor("Vidar's Might", EffectKind::RemoveOppHelmets, [2, 4, 6], [1, 2, 3], 4);

    let mut plain = new_match();
    resolve_round(&mut plain, &roll(&[Ranged]), &roll(&[Helmet]));
    assert_eq!(plain.player(Seat::Two).health(), 15);

    let mut favored = new_match();
    favored.player_mut(Seat::One).add_tokens(2);
    equip(&mut favored, Seat::One, helmet_breaker, Tier::ONE);
    let report = resolve_round(&mut favored, &roll(&[Ranged]), &roll(&[Helmet]));

    assert_eq!(favored.player(Seat::Two).health(), 14);
    assert_eq!(favored.player(Seat::One).tokens(), 0);
    assert_eq!(report.activations.len(), 1);
    assert_eq!(report.activations[0].outcome, EffectOutcome::IconsRemoved(1));
}

#[test]
fn gold_income_comes_from_the_original_roll() {
    let fury = favor("Brunhild's Fury", EffectKind::MultiplyMelee, [3, 6, 9], [250, 300, 400], 4);
    let mut state = new_match();
    state.player_mut(Seat::One).add_tokens(3);
    equip(&mut state, Seat::One, fury, Tier::ONE);

    let report = resolve_round(&mut state, &roll(&[MeleeGold, MeleeGold]), &[]);

    assert_eq!(report.summary.sides[0].melee, 5);
    assert_eq!(report.gold_income, [2, 0]);
    assert_eq!(state.player(Seat::One).tokens(), 2);
    assert_eq!(state.player(Seat::Two).health(), 10);
}

#[test]
fn steal_is_capped_by_opponent_balance() {
    let mut state = new_match();
    state.player_mut(Seat::Two).add_tokens(1);
    let report = resolve_round(&mut state, &roll(&[Steal, Steal, Steal]), &[]);

    assert_eq!(report.stolen, [1, 0]);
    assert_eq!(state.player(Seat::One).tokens(), 1);
    assert_eq!(state.player(Seat::Two).tokens(), 0);
}

#[test]
fn steal_uses_pre_transfer_balances() {
    let mut state = new_match();
    state.player_mut(Seat::One).add_tokens(1);
    state.player_mut(Seat::Two).add_tokens(0);
    let report = resolve_round(&mut state, &roll(&[Steal]), &roll(&[Steal, Steal]));

    // seat two can only take the one token seat one held before transfers
    assert_eq!(report.stolen, [0, 1]);
    assert_eq!(state.player(Seat::One).tokens(), 0);
    assert_eq!(state.player(Seat::Two).tokens(), 1);
}

#[test]
fn unaffordable_favor_is_a_silent_no_op() {
    let strike = favor("Thor's Strike", EffectKind::Damage, [4, 8, 12], [2, 5, 8], 6);
    let mut state = new_match();
    state.player_mut(Seat::One).add_tokens(4);
    state.player_mut(Seat::Two).add_tokens(3);
    equip(&mut state, Seat::One, strike, Tier::ONE);
    state.player_mut(Seat::One).spend_tokens(1);
    let log_len = state.log().len();

    let report = resolve_round(&mut state, &[], &[]);

    assert_eq!(state.player(Seat::One).tokens(), 3);
    assert_eq!(state.player(Seat::Two).tokens(), 3);
    assert_eq!(state.player(Seat::Two).health(), 15);
    assert!(report.activations.is_empty());
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].available, 3);
    // only the round summary was added
    assert_eq!(state.log().len(), log_len + 1);
}

#[test]
fn pre_drain_can_starve_a_post_favor() {
    let drain = favor("Skuld's Claim", EffectKind::DestroyOppTokensPerArrow, [1, 2, 3], [2, 3, 4], 3);
    let strike = favor("Thor's Strike", EffectKind::Damage, [4, 8, 12], [2, 5, 8], 6);
    let mut state = new_match();
    state.player_mut(Seat::One).add_tokens(1);
    state.player_mut(Seat::Two).add_tokens(4);
    equip(&mut state, Seat::One, drain, Tier::ONE);
    equip(&mut state, Seat::Two, strike, Tier::ONE);

    let report = resolve_round(&mut state, &roll(&[Ranged, Ranged]), &roll(&[Helmet, Helmet]));

    assert_eq!(state.player(Seat::Two).tokens(), 0);
    assert_eq!(state.player(Seat::One).health(), 15);
    assert_eq!(report.skipped[0].seat, Seat::Two);
}

#[test]
fn equal_priority_resolves_seat_one_first() {
    let thrymr = favor("Thrymr's Theft", EffectKind::ReduceOppFavorLevel, [1, 2, 3], [1, 2, 3], 1);
    let mut state = new_match();
    for seat in Seat::BOTH {
        state.player_mut(seat).add_tokens(1);
        equip(&mut state, seat, thrymr.clone(), Tier::ONE);
    }

    let report = resolve_round(&mut state, &[], &[]);

    assert_eq!(report.activations.len(), 1);
    assert_eq!(report.activations[0].seat, Seat::One);
    assert_eq!(report.activations[0].outcome, EffectOutcome::ChoiceCancelled);
    assert_eq!(state.player(Seat::Two).tokens(), 1);
}

#[test]
fn lower_priority_applies_first_across_seats() {
    let gain = favor("Freyja's Plenty", EffectKind::GainTokens, [1, 2, 3], [4, 6, 8], 2);
    let drain = favor("Skuld's Claim", EffectKind::DestroyOppTokensPerArrow, [1, 2, 3], [1, 2, 3], 5);
    let mut state = new_match();
    state.player_mut(Seat::One).add_tokens(1);
    state.player_mut(Seat::Two).add_tokens(1);
    equip(&mut state, Seat::One, drain, Tier::ONE);
    equip(&mut state, Seat::Two, gain, Tier::ONE);

    let report = resolve_round(&mut state, &roll(&[Ranged, Ranged]), &roll(&[Helmet, Helmet]));

    let order: Vec<Seat> = report.activations.iter().map(|a| a.seat).collect();
    assert_eq!(order, vec![Seat::Two, Seat::One]);
    assert_eq!(report.activations[1].outcome, EffectOutcome::TokensDestroyed(2));
    assert_eq!(state.player(Seat::Two).tokens(), 2);
}

#[test]
fn post_favors_see_damage_taken() {
    let mimir = favor("Mimir's Wisdom", EffectKind::TokensPerDamageTaken, [1, 2, 3], [1, 2, 3], 4);
    let mut state = new_match();
    state.player_mut(Seat::Two).add_tokens(2);
    equip(&mut state, Seat::Two, mimir, Tier::TWO);

    resolve_round(&mut state, &roll(&[Melee, Melee, Melee]), &[]);

    assert_eq!(state.player(Seat::Two).health(), 12);
    assert_eq!(state.player(Seat::Two).tokens(), 6);
}

#[test]
fn damage_taken_counts_the_full_hit_at_low_health() {
    let mimir = favor("Mimir's Wisdom", EffectKind::TokensPerDamageTaken, [1, 2, 3], [1, 2, 3], 4);
    let mut state = new_match();
    state.player_mut(Seat::Two).take_damage(13);
    state.player_mut(Seat::Two).add_tokens(1);
    equip(&mut state, Seat::Two, mimir, Tier::ONE);

    let report = resolve_round(&mut state, &roll(&[Melee, Melee, Melee, Melee, Melee]), &[]);

    assert_eq!(report.health_lost[1], 2);
    assert_eq!(report.summary.sides[0].damage, 5);
    assert_eq!(state.player(Seat::Two).health(), 0);
    assert_eq!(state.player(Seat::Two).tokens(), 5);
}

#[test]
fn saturated_majority_bonus_resolves_without_overflow() {
    let surge = favor("Surge", EffectKind::BonusMajority, [1, 1, 1], [u32::MAX; 3], 2);
    let mut state = new_match();
    state.player_mut(Seat::One).add_tokens(1);
    equip(&mut state, Seat::One, surge, Tier::ONE);

    let report = resolve_round(&mut state, &roll(&[Melee, MeleeGold]), &roll(&[Shield]));

    assert_eq!(report.summary.sides[0].melee, u32::MAX);
    assert_eq!(report.melee_damage[0], u32::MAX - 1);
    assert_eq!(state.player(Seat::Two).health(), 0);
    assert_eq!(state.player(Seat::One).tokens(), 1);
}

#[test]
fn damage_favor_cannot_push_health_below_zero() {
    let strike = favor("Thor's Strike", EffectKind::Damage, [1, 1, 1], [50, 50, 50], 6);
    let mut state = new_match();
    state.player_mut(Seat::One).add_tokens(1);
    equip(&mut state, Seat::One, strike, Tier::ONE);

    let report = resolve_round(&mut state, &roll(&[Melee]), &[]);

    assert_eq!(state.player(Seat::Two).health(), 0);
    assert_eq!(report.activations[0].outcome, EffectOutcome::Damage(14));
    assert_eq!(state.winner(), Some(Seat::One));
    assert_eq!(state.choose_favor(Seat::One, "Thor's Strike", Tier::ONE), Err(StateError::GameOver));
}

#[test]
fn round_close_resets_per_round_state() {
    let mut state = new_match();
    state.player_mut(Seat::One).add_tokens(1);
    equip(&mut state, Seat::One, filler("Gift"), Tier::ONE);
    state.roll_dice(&crate::rng::PcgRng).unwrap();
    state.toggle_lock(Seat::One, 0).unwrap();
    state.toggle_lock(Seat::Two, 5).unwrap();
    let faces = Seat::BOTH.map(|seat| state.player(seat).dice().current_faces());

    let report = RoundEngine::new(&mut state).resolve([faces[0].as_slice(), faces[1].as_slice()]);

    assert_eq!(report.round, 1);
    assert_eq!(state.round(), 2);
    assert_eq!(state.roll_phase(), 1);
    for seat in Seat::BOTH {
        assert!(state.player(seat).choice().is_none());
        assert_eq!(state.player(seat).dice().locked_count(), 0);
    }
    assert_eq!(state.last_round(), Some(&report.summary));
    assert!(matches!(state.log().newest(), Some(LogEntry::Round(_))));
}

#[test]
fn token_delta_tracks_net_change() {
    let mut state = new_match();
    state.player_mut(Seat::Two).add_tokens(3);
    let report = resolve_round(&mut state, &roll(&[Steal, StealGold, MeleeGold]), &roll(&[ShieldGold]));

    assert_eq!(report.stolen, [2, 0]);
    assert_eq!(report.gold_income, [2, 1]);
    assert_eq!(report.token_delta, [4, -1]);
}

// ===== properties =====

fn any_face() -> impl Strategy<Value = Option<Face>> {
    prop_oneof![1 => Just(None::<Face>), 9 => proptest::sample::select(Face::ALL.to_vec()).prop_map(Some)]
}

fn any_roll() -> impl Strategy<Value = Vec<Option<Face>>> {
    proptest::collection::vec(any_face(), 0..=6)
}

fn any_choice() -> impl Strategy<Value = Option<(EffectKind, u8, u32, u32)>> {
    proptest::option::of((
        proptest::sample::select(EffectKind::ALL.to_vec()),
        0u8..3,
        0u32..20,
        0u32..10,
    ))
}

fn arm(state: &mut MatchState, seat: Seat, choice: Option<(EffectKind, u8, u32, u32)>) {
    let Some((effect, tier, magnitude, priority)) = choice else {
        return;
    };
    let magnitude = if effect == EffectKind::MultiplyMelee {
        100 + magnitude * 25
    } else {
        magnitude
    };
    let featured = favor("Featured", effect, [1, 2, 3], [magnitude; 3], priority);
    let tier = Tier::try_from(tier).unwrap();
    equip(state, seat, featured, tier);
}

proptest! {
    #[test]
    fn resolution_keeps_health_and_tokens_in_bounds(
        rolls in (any_roll(), any_roll()),
        tokens in (0u32..12, 0u32..12),
        choices in (any_choice(), any_choice()),
    ) {
        let mut state = new_match();
        state.player_mut(Seat::One).add_tokens(tokens.0.max(3));
        state.player_mut(Seat::Two).add_tokens(tokens.1.max(3));
        arm(&mut state, Seat::One, choices.0);
        arm(&mut state, Seat::Two, choices.1);
        let before = state.players().each_ref().map(|p| p.tokens());

        let report = resolve_round(&mut state, &rolls.0, &rolls.1);

        for seat in Seat::BOTH {
            let player = state.player(seat);
            prop_assert!(player.health() <= player.max_health());
            prop_assert!(report.stolen[seat.index()] <= before[seat.opponent().index()]);
            prop_assert!(player.choice().is_none());
            prop_assert_eq!(player.dice().locked_count(), 0);
        }
        prop_assert_eq!(state.round(), 2);
    }

    #[test]
    fn removal_never_underflows(
        faces in proptest::collection::vec(any_face(), 0..=6),
        amount in 0u32..10,
    ) {
        let mut counts = FaceCounts::from_faces(&faces);
        let before = counts.helmets();
        let removed = counts.remove_up_to(crate::face::FaceCategory::Helmet, amount);
        prop_assert_eq!(removed, before.min(amount));
        prop_assert_eq!(counts.helmets(), before - removed);
    }
}

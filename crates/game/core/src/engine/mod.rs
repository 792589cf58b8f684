//! Round resolution.
//!
//! [`RoundEngine`] turns both players' rolled faces plus their favor choices
//! into health, token and counter changes on a [`MatchState`]. One call
//! walks the stages in fixed order:
//!
//! 1. count faces
//! 2. PRE favors, ascending priority (may mutate the count maps)
//! 3. simultaneous steal from the pre-transfer balances
//! 4. gold income from the original roll
//! 5. base melee/ranged damage from the mutated counts
//! 6. POST favors, ascending priority, with damage taken in context
//! 7. round summary, then per-round state is reset
//!
//! Within a phase, equal priorities resolve in seat order ([`Seat::One`] first).
//! A favor whose tier cost exceeds the balance when its phase is reached is
//! skipped without a log entry.

mod counts;
mod effects;
mod report;

pub use counts::FaceCounts;
pub use report::{EffectOutcome, FavorActivation, RoundReport, SkippedFavor};

use crate::face::Face;
use crate::favor::FavorPhase;
use crate::state::{LogEntry, MatchState, RoundSummary, Seat, SideTally};

use effects::{EffectContext, apply_effect};

/// Progress of one resolution call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolutionStage {
    Unresolved,
    PreApplied,
    CombatResolved,
    PostApplied,
    RoundClosed,
}

impl ResolutionStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionStage::Unresolved => "unresolved",
            ResolutionStage::PreApplied => "pre_applied",
            ResolutionStage::CombatResolved => "combat_resolved",
            ResolutionStage::PostApplied => "post_applied",
            ResolutionStage::RoundClosed => "round_closed",
        }
    }
}

/// Splits a per-seat pair into (actor, opponent).
fn pair_mut<T>(pair: &mut [T; 2], actor: Seat) -> (&mut T, &mut T) {
    let [one, two] = pair;
    match actor {
        Seat::One => (one, two),
        Seat::Two => (two, one),
    }
}

/// Resolves rounds against an exclusively borrowed match state.
pub struct RoundEngine<'a> {
    state: &'a mut MatchState,
    stage: ResolutionStage,
}

impl<'a> RoundEngine<'a> {
    pub fn new(state: &'a mut MatchState) -> Self {
        Self {
            state,
            stage: ResolutionStage::Unresolved,
        }
    }

    /// Resolves the current round from both players' face rolls, indexed by seat.
    ///
    /// Never fails: every arithmetic path clamps at zero and unaffordable
    /// favors are skipped.
    pub fn resolve(&mut self, rolls: [&[Option<Face>]; 2]) -> RoundReport {
        self.stage = ResolutionStage::Unresolved;
        let round = self.state.round();

        let original = rolls.map(FaceCounts::from_faces);
        let mut counts = original;
        let tokens_before = self.state.players().each_ref().map(|p| i64::from(p.tokens()));

        let mut activations = Vec::new();
        let mut skipped = Vec::new();

        self.apply_phase(FavorPhase::Pre, &mut counts, [0, 0], &mut activations, &mut skipped);
        self.stage = ResolutionStage::PreApplied;

        let stolen = self.resolve_steal(&counts);
        let gold_income = original.map(|c| c.gold_count());
        for seat in Seat::BOTH {
            self.state
                .player_mut(seat)
                .add_tokens(gold_income[seat.index()]);
        }

        let sides = Seat::BOTH.map(|seat| {
            let (own, theirs) = (&counts[seat.index()], &counts[seat.opponent().index()]);
            let mut tally = SideTally {
                name: self.state.player(seat).name().to_string(),
                melee: own.melee(),
                ranged: own.ranged(),
                opponent_shields: theirs.shields(),
                opponent_helmets: theirs.helmets(),
                damage: 0,
            };
            tally.damage = tally.melee_damage().saturating_add(tally.ranged_damage());
            tally
        });
        let melee_damage = sides.each_ref().map(SideTally::melee_damage);
        let ranged_damage = sides.each_ref().map(SideTally::ranged_damage);

        // incoming[i] is the opponent's computed damage against seat i,
        // health_lost[i] the part of it that health could absorb
        let incoming = Seat::BOTH.map(|seat| sides[seat.opponent().index()].damage);
        let health_lost =
            Seat::BOTH.map(|seat| self.state.player_mut(seat).take_damage(incoming[seat.index()]));
        self.stage = ResolutionStage::CombatResolved;

        self.apply_phase(FavorPhase::Post, &mut counts, incoming, &mut activations, &mut skipped);
        self.stage = ResolutionStage::PostApplied;

        let summary = RoundSummary { round, sides };
        self.state.record(LogEntry::Round(summary.clone()));

        let token_delta = Seat::BOTH.map(|seat| {
            i64::from(self.state.player(seat).tokens()) - tokens_before[seat.index()]
        });

        self.state.close_round(summary.clone());
        self.stage = ResolutionStage::RoundClosed;

        RoundReport {
            round,
            summary,
            melee_damage,
            ranged_damage,
            health_lost,
            stolen,
            gold_income,
            token_delta,
            activations,
            skipped,
            stage: self.stage,
        }
    }

    /// Applies every chosen favor of `phase` in ascending priority order.
    ///
    /// The choice is re-read at application time because an earlier effect
    /// may have lowered or cancelled it.
    fn apply_phase(
        &mut self,
        phase: FavorPhase,
        counts: &mut [FaceCounts; 2],
        damage_taken: [u32; 2],
        activations: &mut Vec<FavorActivation>,
        skipped: &mut Vec<SkippedFavor>,
    ) {
        let mut order: Vec<(u32, Seat)> = Seat::BOTH
            .iter()
            .filter_map(|&seat| {
                let choice = self.state.player(seat).choice()?;
                choice.priority_in(phase).map(|priority| (priority, seat))
            })
            .collect();
        order.sort();

        for (_, seat) in order {
            let Some(choice) = self.state.player(seat).choice().cloned() else {
                continue;
            };
            if choice.favor.phase != phase {
                continue;
            }

            let (actor, opponent) = pair_mut(self.state.players_mut(), seat);
            let cost = choice.cost();
            if actor.tokens() < cost {
                skipped.push(SkippedFavor {
                    seat,
                    favor: choice.favor.name.clone(),
                    cost,
                    available: actor.tokens(),
                });
                continue;
            }
            actor.spend_tokens(cost);

            let (own, theirs) = pair_mut(counts, seat);
            let outcome = apply_effect(
                choice.favor.effect,
                choice.magnitude(),
                EffectContext {
                    actor,
                    opponent,
                    own,
                    theirs,
                    damage_taken: damage_taken[seat.index()],
                },
            );

            let activation = FavorActivation {
                seat,
                player: self.state.player(seat).name().to_string(),
                favor: choice.favor.name,
                tier: choice.tier,
                phase,
                cost,
                outcome,
            };
            self.state.record(LogEntry::FavorUsed(activation.clone()));
            activations.push(activation);
        }
    }

    /// Simultaneous steal: both transfers are capped by the pre-transfer
    /// balances. Returns tokens taken per seat.
    fn resolve_steal(&mut self, counts: &[FaceCounts; 2]) -> [u32; 2] {
        let balances = self.state.players().each_ref().map(|p| p.tokens());
        let taken = Seat::BOTH.map(|seat| {
            counts[seat.index()]
                .steals()
                .min(balances[seat.opponent().index()])
        });
        for seat in Seat::BOTH {
            self.state
                .player_mut(seat.opponent())
                .spend_tokens(taken[seat.index()]);
        }
        for seat in Seat::BOTH {
            self.state.player_mut(seat).add_tokens(taken[seat.index()]);
        }
        taken
    }
}

/// Resolves one round of `state` from both players' rolls.
pub fn resolve_round(
    state: &mut MatchState,
    player_one: &[Option<Face>],
    player_two: &[Option<Face>],
) -> RoundReport {
    RoundEngine::new(state).resolve([player_one, player_two])
}

#[cfg(test)]
mod tests;

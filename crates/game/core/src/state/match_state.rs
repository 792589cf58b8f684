use crate::config::GameConfig;
use crate::dice::DiceError;
use crate::face::Face;
use crate::favor::Tier;
use crate::rng::{RngOracle, RollKey};

use super::{EventLog, LogEntry, Loadout, PlayerState, RoundSummary, Seat, StateError};

/// How a finished match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchOutcome {
    Winner(Seat),
    /// Both players reached zero health in the same round.
    Draw,
}

/// Canonical snapshot of a match.
///
/// The round counter starts at 1 and only ever increases. `roll_phase` is the
/// 1-based number of the next roll within the round; once it exceeds
/// `rolls_per_round` the round must be resolved before rolling again.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    config: GameConfig,
    /// Set once at match creation; every die roll derives from it.
    pub game_seed: u64,
    players: [PlayerState; 2],
    round: u32,
    roll_phase: u32,
    log: EventLog<LogEntry>,
    last_round: Option<RoundSummary>,
}

impl MatchState {
    pub fn new(
        config: GameConfig,
        game_seed: u64,
        player_one: impl Into<String>,
        player_two: impl Into<String>,
    ) -> Self {
        let players = [
            PlayerState::new(Seat::One, player_one, &config),
            PlayerState::new(Seat::Two, player_two, &config),
        ];
        Self {
            log: EventLog::new(config.log_capacity),
            config,
            game_seed,
            players,
            round: 1,
            roll_phase: 1,
            last_round: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn roll_phase(&self) -> u32 {
        self.roll_phase
    }

    pub fn rolls_remaining(&self) -> u32 {
        self.config
            .rolls_per_round
            .saturating_sub(self.roll_phase.saturating_sub(1))
    }

    pub fn player(&self, seat: Seat) -> &PlayerState {
        &self.players[seat.index()]
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut PlayerState {
        &mut self.players[seat.index()]
    }

    pub fn players(&self) -> &[PlayerState; 2] {
        &self.players
    }

    pub(crate) fn players_mut(&mut self) -> &mut [PlayerState; 2] {
        &mut self.players
    }

    pub fn log(&self) -> &EventLog<LogEntry> {
        &self.log
    }

    pub fn record(&mut self, entry: LogEntry) {
        self.log.push(entry);
    }

    pub fn last_round(&self) -> Option<&RoundSummary> {
        self.last_round.as_ref()
    }

    // ===== match flow =====

    pub fn is_game_over(&self) -> bool {
        self.players.iter().any(PlayerState::is_defeated)
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        match (self.players[0].is_defeated(), self.players[1].is_defeated()) {
            (false, false) => None,
            (true, true) => Some(MatchOutcome::Draw),
            (false, true) => Some(MatchOutcome::Winner(Seat::One)),
            (true, false) => Some(MatchOutcome::Winner(Seat::Two)),
        }
    }

    pub fn winner(&self) -> Option<Seat> {
        match self.outcome() {
            Some(MatchOutcome::Winner(seat)) => Some(seat),
            _ => None,
        }
    }

    /// Fixes a player's loadout and records it in the log.
    pub fn set_loadout(&mut self, seat: Seat, loadout: Loadout) -> Result<(), StateError> {
        let favors = loadout.iter().map(|favor| favor.name.clone()).collect();
        let player = self.player_mut(seat);
        player.set_loadout(loadout)?;
        let entry = LogEntry::Loadout {
            player: player.name().to_string(),
            favors,
        };
        self.record(entry);
        Ok(())
    }

    /// Validated favor pick for the current round, recorded in the log.
    pub fn choose_favor(&mut self, seat: Seat, name: &str, tier: Tier) -> Result<(), StateError> {
        if self.is_game_over() {
            return Err(StateError::GameOver);
        }
        let player = self.player_mut(seat);
        player.choose_favor(name, tier)?;
        let entry = LogEntry::FavorSelected {
            player: player.name().to_string(),
            favor: name.to_string(),
            tier,
        };
        self.record(entry);
        Ok(())
    }

    pub fn toggle_lock(&mut self, seat: Seat, index: usize) -> Result<(), DiceError> {
        self.player_mut(seat).dice_mut().toggle(index)
    }

    /// Rolls every unlocked die of both pools and advances the roll sub-phase.
    ///
    /// Returns the resulting face snapshots indexed by seat.
    pub fn roll_dice<R>(&mut self, rng: &R) -> Result<[Vec<Option<Face>>; 2], StateError>
    where
        R: RngOracle + ?Sized,
    {
        if self.is_game_over() {
            return Err(StateError::GameOver);
        }
        if self.roll_phase > self.config.rolls_per_round {
            return Err(StateError::RollsExhausted {
                round: self.round,
                limit: self.config.rolls_per_round,
            });
        }

        let (round, roll_phase, game_seed) = (self.round, self.roll_phase, self.game_seed);
        let faces = Seat::BOTH.map(|seat| {
            let key = RollKey {
                round,
                roll_phase,
                seat: seat.index() as u8,
            };
            self.players[seat.index()]
                .dice_mut()
                .roll_unlocked(rng, game_seed, key)
        });

        self.record(LogEntry::Roll { round, roll_phase });
        self.roll_phase = self.roll_phase.saturating_add(1);
        Ok(faces)
    }

    /// Ends the current round: stores the tallies, advances the counter and
    /// resets every per-round field.
    pub(crate) fn close_round(&mut self, summary: RoundSummary) {
        self.last_round = Some(summary);
        self.round += 1;
        self.roll_phase = 1;
        for player in &mut self.players {
            player.clear_choice();
            player.dice_mut().clear_locks();
        }
    }
}

//! Match session driver.
//!
//! A [`MatchSession`] owns the match state between rounds and walks each
//! round through its roll sub-phases, lock planning, favor selection and
//! resolution, asking one [`DecisionProvider`] per seat for every decision.
//! Sessions are built with [`SessionBuilder`].

use orlog_content::FavorCatalog;
use orlog_core::{
    GameConfig, GameError, LogEntry, Loadout, MatchOutcome, MatchState, PcgRng, RngOracle,
    RoundEngine, RoundReport, Seat, StateError,
};

use crate::api::{DecisionProvider, Result, RuntimeError};
use crate::repository::StateRepository;

/// Runtime configuration for a session.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    /// Safety cap on rounds played by [`MatchSession::run`].
    pub max_rounds: u32,
    /// Save a snapshot after loadouts are fixed and after every round.
    pub autosave: bool,
}

impl RuntimeConfig {
    pub const DEFAULT_MAX_ROUNDS: u32 = 100;
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            autosave: false,
        }
    }
}

/// How a call to [`MatchSession::run`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchResult {
    /// `None` when `max_rounds` was reached with both players standing.
    pub outcome: Option<MatchOutcome>,
    pub rounds_played: u32,
}

pub struct MatchSession {
    config: RuntimeConfig,
    state: MatchState,
    catalog: FavorCatalog,
    rng: Box<dyn RngOracle>,
    providers: [Box<dyn DecisionProvider>; 2],
    repository: Option<Box<dyn StateRepository>>,
}

impl MatchSession {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn into_state(self) -> MatchState {
        self.state
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn catalog(&self) -> &FavorCatalog {
        &self.catalog
    }

    /// Asks each provider without a fixed loadout to pick one.
    pub fn setup_loadouts(&mut self) -> Result<()> {
        let mut changed = false;
        for seat in Seat::BOTH {
            if self.state.player(seat).loadout().is_some() {
                continue;
            }
            let favors =
                self.providers[seat.index()].choose_loadout(seat, &self.state, &self.catalog)?;
            self.state.set_loadout(seat, Loadout::new(favors)?)?;
            changed = true;
        }
        if changed && self.config.autosave {
            self.save_as(0)?;
        }
        Ok(())
    }

    /// Plays the current round from its next roll through resolution.
    pub fn play_round(&mut self) -> Result<RoundReport> {
        if self.state.is_game_over() {
            return Err(StateError::GameOver.into());
        }

        while self.state.rolls_remaining() > 0 {
            self.state.roll_dice(self.rng.as_ref())?;
            tracing::debug!(
                round = self.state.round(),
                roll_phase = self.state.roll_phase() - 1,
                "rolled dice"
            );
            if self.state.rolls_remaining() > 0 {
                for seat in Seat::BOTH {
                    let slots = self.providers[seat.index()].plan_locks(seat, &self.state)?;
                    self.apply_locks(seat, &slots)?;
                }
            }
        }

        for seat in Seat::BOTH {
            self.select_favor(seat)?;
        }

        let faces = Seat::BOTH.map(|seat| self.state.player(seat).dice().current_faces());
        let report =
            RoundEngine::new(&mut self.state).resolve([faces[0].as_slice(), faces[1].as_slice()]);
        tracing::debug!(
            round = report.round,
            stage = report.stage.as_str(),
            activations = report.activations.len(),
            "round resolved"
        );

        for skipped in &report.skipped {
            tracing::warn!(
                "{} could not afford {} ({} tokens, had {}); favor skipped",
                skipped.seat,
                skipped.favor,
                skipped.cost,
                skipped.available
            );
        }
        self.state.record(LogEntry::Economy {
            gold: report.gold_income,
            stolen: report.stolen,
            net: report.token_delta,
        });
        tracing::info!("{}", report.summary);

        if let Some(outcome) = self.state.outcome() {
            self.record_outcome(outcome);
        }
        if self.config.autosave {
            self.save_as(report.round)?;
        }
        Ok(report)
    }

    /// Plays rounds until the match ends or `max_rounds` is reached.
    pub fn run(&mut self) -> Result<MatchResult> {
        self.setup_loadouts()?;

        let mut rounds_played = 0;
        while !self.state.is_game_over() && rounds_played < self.config.max_rounds {
            self.play_round()?;
            rounds_played += 1;
        }

        let outcome = self.state.outcome();
        if outcome.is_none() {
            tracing::warn!(
                "stopping after {} rounds with both players standing",
                rounds_played
            );
        }
        Ok(MatchResult {
            outcome,
            rounds_played,
        })
    }

    /// Saves the state under the last completed round.
    pub fn save(&self) -> Result<()> {
        self.save_as(self.state.round().saturating_sub(1))
    }

    fn save_as(&self, round: u32) -> Result<()> {
        let repository = self
            .repository
            .as_ref()
            .ok_or(RuntimeError::RepositoryNotSet)?;
        repository.save(round, &self.state)?;
        Ok(())
    }

    fn apply_locks(&mut self, seat: Seat, slots: &[usize]) -> Result<()> {
        let dice = self.state.player_mut(seat).dice_mut();
        dice.clear_locks();
        for &slot in slots {
            dice.set_locked(slot, true)?;
        }
        Ok(())
    }

    fn select_favor(&mut self, seat: Seat) -> Result<()> {
        let Some(pick) = self.providers[seat.index()].choose_favor(seat, &self.state)? else {
            return Ok(());
        };
        match self.state.choose_favor(seat, &pick.name, pick.tier) {
            Ok(()) => {
                tracing::debug!("{} selected {} at {}", seat, pick.name, pick.tier);
                Ok(())
            }
            Err(err) if err.severity().is_recoverable() => {
                tracing::warn!("{} favor rejected: {}", seat, err);
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn record_outcome(&mut self, outcome: MatchOutcome) {
        let entry = match outcome {
            MatchOutcome::Winner(seat) => {
                let name = self.state.player(seat).name().to_string();
                tracing::info!("{} ({}) wins in round {}", name, seat, self.state.round() - 1);
                LogEntry::Winner {
                    seat: Some(seat),
                    player: Some(name),
                }
            }
            MatchOutcome::Draw => {
                tracing::info!("match ends in a draw");
                LogEntry::Winner {
                    seat: None,
                    player: None,
                }
            }
        };
        self.state.record(entry);
    }
}

/// Builder for [`MatchSession`].
pub struct SessionBuilder {
    config: RuntimeConfig,
    seed: u64,
    names: [String; 2],
    state: Option<MatchState>,
    catalog: Option<FavorCatalog>,
    rng: Option<Box<dyn RngOracle>>,
    providers: [Option<Box<dyn DecisionProvider>>; 2],
    repository: Option<Box<dyn StateRepository>>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            seed: 0,
            names: ["Player 1".to_string(), "Player 2".to_string()],
            state: None,
            catalog: None,
            rng: None,
            providers: [None, None],
            repository: None,
        }
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn player_names(mut self, one: impl Into<String>, two: impl Into<String>) -> Self {
        self.names = [one.into(), two.into()];
        self
    }

    /// Resume from an existing state instead of starting a new match.
    /// The seed and player names are then taken from the state.
    pub fn state(mut self, state: MatchState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn catalog(mut self, catalog: FavorCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    pub fn provider(mut self, seat: Seat, provider: impl DecisionProvider + 'static) -> Self {
        self.providers[seat.index()] = Some(Box::new(provider));
        self
    }

    pub fn repository(mut self, repository: impl StateRepository + 'static) -> Self {
        self.repository = Some(Box::new(repository));
        self
    }

    pub fn build(self) -> Result<MatchSession> {
        let [one, two] = self.providers;
        let providers = [
            one.ok_or(RuntimeError::ProviderNotSet { seat: Seat::One })?,
            two.ok_or(RuntimeError::ProviderNotSet { seat: Seat::Two })?,
        ];
        if self.config.autosave && self.repository.is_none() {
            return Err(RuntimeError::RepositoryNotSet);
        }

        let [name_one, name_two] = self.names;
        let state = match self.state {
            Some(state) => state,
            None => MatchState::new(self.config.game.clone(), self.seed, name_one, name_two),
        };
        tracing::debug!(
            seed = state.game_seed,
            round = state.round(),
            "built match session"
        );

        Ok(MatchSession {
            config: self.config,
            state,
            catalog: self
                .catalog
                .unwrap_or_else(|| FavorCatalog::standard().clone()),
            rng: self.rng.unwrap_or_else(|| Box::new(PcgRng)),
            providers,
            repository: self.repository,
        })
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Headless Orlog match runner.
//!
//! Plays one AI-vs-AI match from environment configuration and prints the
//! match log. See [`config::CliConfig::from_env`] for the variables read.
//!
//! ```bash
//! ORLOG_SEED=42 ORLOG_SAVE_DIR=saves RUST_LOG=debug cargo run -p orlog-client
//! ```
mod config;

use anyhow::{Context, Result};
use orlog_content::{ContentFactory, FavorCatalog};
use orlog_core::{GameConfig, MatchOutcome, MatchState, Seat};
use orlog_runtime::{
    FileStateRepository, GreedyAiProvider, MatchSession, PassiveProvider, RuntimeConfig,
};

use config::CliConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = CliConfig::from_env();
    tracing::info!("Starting Orlog match (seed {})", cli.seed);

    let (game, catalog) = load_content(&cli)?;
    let runtime_config = RuntimeConfig {
        game,
        max_rounds: cli.max_rounds,
        autosave: cli.save_dir.is_some(),
    };

    let [one, two] = cli.player_names.clone();
    let mut builder = MatchSession::builder()
        .config(runtime_config)
        .seed(cli.seed)
        .player_names(one, two)
        .catalog(catalog)
        .provider(Seat::Two, GreedyAiProvider::new());

    builder = if cli.passive_player_one {
        builder.provider(Seat::One, PassiveProvider)
    } else {
        builder.provider(Seat::One, GreedyAiProvider::new())
    };

    if let Some(dir) = &cli.save_dir {
        let repository = FileStateRepository::new(dir)
            .with_context(|| format!("opening save directory {}", dir.display()))?;
        tracing::info!("Saving snapshots to {}", dir.display());
        builder = builder.repository(repository);
    }

    let mut session = builder.build()?;
    let result = session.run()?;

    print_log(session.state());
    match result.outcome {
        Some(MatchOutcome::Winner(seat)) => println!(
            "{} wins after {} rounds.",
            session.state().player(seat).name(),
            result.rounds_played
        ),
        Some(MatchOutcome::Draw) => {
            println!("Draw after {} rounds.", result.rounds_played)
        }
        None => println!(
            "No winner after {} rounds (round cap reached).",
            result.rounds_played
        ),
    }
    Ok(())
}

fn load_content(cli: &CliConfig) -> Result<(GameConfig, FavorCatalog)> {
    match &cli.data_dir {
        Some(dir) => {
            let factory = ContentFactory::new(dir);
            let game = factory
                .load_config()
                .with_context(|| format!("loading config from {}", dir.display()))?;
            let catalog = factory
                .load_favors()
                .with_context(|| format!("loading favors from {}", dir.display()))?;
            tracing::info!("Loaded {} favors from {}", catalog.len(), dir.display());
            Ok((game, catalog))
        }
        None => Ok((GameConfig::default(), FavorCatalog::standard().clone())),
    }
}

fn print_log(state: &MatchState) {
    let entries: Vec<_> = state.log().iter().collect();
    for entry in entries.into_iter().rev() {
        println!("{}", entry);
    }
    for player in state.players() {
        println!(
            "{}: {} health, {} tokens",
            player.name(),
            player.health(),
            player.tokens()
        );
    }
}

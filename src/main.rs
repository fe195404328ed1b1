//! Strictly Tic-Tac-Toe - Unified CLI
//!
//! Play in the terminal or run engine-versus-engine batches.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_tictactoe::{GameConfig, GameMode, Player, Strategy, run_matches, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            level,
            engine_player,
            seed,
            log_file,
        } => run_play(config, mode, level, engine_player, seed, log_file),
        Command::Simulate {
            games,
            x_level,
            o_level,
            seed,
            json,
        } => run_simulate(games, x_level, o_level, seed, json),
    }
}

/// Run the interactive board
fn run_play(
    config_path: PathBuf,
    mode: Option<GameMode>,
    level: Option<u8>,
    engine_player: Option<Player>,
    seed: Option<u64>,
    log_file: PathBuf,
) -> Result<()> {
    let mut config = GameConfig::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    // Command-line flags win over the file
    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }
    if let Some(level) = level {
        config = config.with_level(level);
    }
    if let Some(player) = engine_player {
        config = config.with_engine_player(player);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    config.strategy()?;

    tui::run(&config, &log_file)
}

/// Run a batch of engine-versus-engine games
#[instrument]
fn run_simulate(games: u32, x_level: u8, o_level: u8, seed: Option<u64>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let x_strategy = Strategy::from_level(x_level).context("Invalid --x-level")?;
    let o_strategy = Strategy::from_level(o_level).context("Invalid --o-level")?;

    info!(%x_strategy, %o_strategy, "Starting simulation");
    let summary = run_matches(games, x_strategy, o_strategy, seed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}

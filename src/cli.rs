//! Command-line interface for strictly_tictactoe.

use strictly_tictactoe::{GameMode, Player};
use clap::{Parser, Subcommand};

/// Strictly Tic-Tac-Toe - play against a random or perfect opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to game configuration file
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: std::path::PathBuf,

        /// Game mode (pvp or ai), overrides the config file
        #[arg(long)]
        mode: Option<GameMode>,

        /// Engine level (0 random, 1 exhaustive search), overrides the config file
        #[arg(short, long)]
        level: Option<u8>,

        /// Side the engine plays (X or O), overrides the config file
        #[arg(long)]
        engine_player: Option<Player>,

        /// Seed for reproducible random play
        #[arg(long)]
        seed: Option<u64>,

        /// File that receives log output while the board is on screen
        #[arg(long, default_value = "strictly_tictactoe.log")]
        log_file: std::path::PathBuf,
    },

    /// Play engine-versus-engine games without a board on screen
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Level of the engine playing crosses
        #[arg(long, default_value = "1")]
        x_level: u8,

        /// Level of the engine playing circles
        #[arg(long, default_value = "0")]
        o_level: u8,

        /// Seed for reproducible random play
        #[arg(long)]
        seed: Option<u64>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

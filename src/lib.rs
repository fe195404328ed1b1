//! Strictly Tic-Tac-Toe library - a checked board and a perfect opponent
//!
//! # Architecture
//!
//! - **Games**: the 3x3 board, its rules and invariants
//! - **AI**: the decision engine (random play or exhaustive minimax)
//! - **Session**: turn alternation between a human and the engine, or two humans
//! - **TUI**: ratatui front end driven by keyboard and mouse
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{BoardState, DecisionEngine, Player, Strategy};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut board = BoardState::new();
//! board.mark(1, 1, Player::PlayerA)?;
//!
//! let mut engine = DecisionEngine::with_seed(Strategy::ExhaustiveSearch, Player::PlayerB, 7);
//! let (row, col) = engine.decide(&board)?;
//! board.mark(row, col, Player::PlayerB)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod ai;
pub mod config;
pub mod games;
pub mod session;
pub mod simulate;
pub mod tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BoardState, Cell, Coord, InvalidMove, Line, Move, Outcome, ParseBoardError, Player, Position,
    WinningLine,
};

// Crate-level exports - Decision engine
pub use ai::{Decision, DecisionEngine, Evaluation, NoLegalMove, Strategy, UnknownLevel};

// Crate-level exports - Session management
pub use session::{GameMode, GameSession, MatchRecord, SessionError, play_match};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Simulation
pub use simulate::{MatchSummary, run_matches};

//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Player {
    /// Crosses. Always moves first.
    #[serde(alias = "x", alias = "X")]
    #[strum(to_string = "X", serialize = "x", serialize = "PlayerA")]
    PlayerA,
    /// Circles. Moves second.
    #[serde(alias = "o", alias = "O")]
    #[strum(to_string = "O", serialize = "o", serialize = "PlayerB")]
    PlayerB,
}

impl Player {
    /// Returns the opponent player.
    #[instrument]
    pub fn opponent(self) -> Self {
        match self {
            Player::PlayerA => Player::PlayerB,
            Player::PlayerB => Player::PlayerA,
        }
    }

    /// Single-character symbol used on the board.
    pub fn symbol(self) -> char {
        match self {
            Player::PlayerA => 'X',
            Player::PlayerB => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Unclaimed cell.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Marked(Player),
}

impl Cell {
    /// Returns the owner of the cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Marked(player) => Some(player),
        }
    }
}

/// Result of evaluating a board.
///
/// Always derived from the grid, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// The game is still in progress.
    #[display("in progress")]
    NoResult,
    /// A player completed a line.
    #[display("{} wins", _0)]
    Win(Player),
    /// The board is full and nobody completed a line.
    #[display("draw")]
    Draw,
}

impl Outcome {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::NoResult)
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

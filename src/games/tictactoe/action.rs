//! Moves and the error raised when a move breaks the board's contract.

use super::position::Coord;
use super::Player;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Row of the marked cell.
    pub row: usize,
    /// Column of the marked cell.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, (row, col): Coord) -> Self {
        Self { player, row, col }
    }

    /// The `(row, col)` of this move.
    pub fn coord(&self) -> Coord {
        (self.row, self.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.player, self.row, self.col)
    }
}

/// Attempted mark on a cell that cannot take it.
///
/// Always a caller bug: legal play never produces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMove {
    /// Coordinates fall outside the 3x3 grid.
    #[display("Cell ({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already carries a mark.
    #[display("Cell ({row}, {col}) is already occupied by {owner}")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Player holding the cell.
        owner: Player,
    },
}

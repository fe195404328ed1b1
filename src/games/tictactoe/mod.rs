//! Tic-tac-toe: board, rules and invariants.

mod action;
mod board;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{InvalidMove, Move};
pub use board::{BoardState, ParseBoardError, CELLS};
pub use position::{Coord, Position, SIZE};
pub use rules::{Line, WinningLine};
pub use types::{Cell, Outcome, Player};

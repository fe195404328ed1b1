//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. The search and the renderer both
//! read line geometry from here.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{check_winner, find_winning_line, Line, WinningLine};

use super::{BoardState, Outcome};

/// Derives the outcome of a board.
///
/// Win is checked before fullness, so a full board carrying a line is a win.
pub fn evaluate(board: &BoardState) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::NoResult
    }
}

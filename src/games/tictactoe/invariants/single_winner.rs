//! Single-winner invariant: at most one player completes a line.

use super::super::rules::Line;
use super::super::{BoardState, Cell, Player};
use super::Invariant;

/// Invariant: both players never hold a completed line at once.
pub struct SingleWinnerInvariant;

impl SingleWinnerInvariant {
    fn has_line(board: &BoardState, player: Player) -> bool {
        Line::CHECK_ORDER.into_iter().any(|line| {
            line.cells()
                .into_iter()
                .all(|(row, col)| board.cell(row, col) == Some(Cell::Marked(player)))
        })
    }
}

impl Invariant<BoardState> for SingleWinnerInvariant {
    fn holds(board: &BoardState) -> bool {
        !(Self::has_line(board, Player::PlayerA) && Self::has_line(board, Player::PlayerB))
    }

    fn description() -> &'static str {
        "At most one player holds a completed line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_holds() {
        assert!(SingleWinnerInvariant::holds(&"XXX/OO./...".parse().unwrap()));
    }

    #[test]
    fn test_double_line_violates() {
        assert!(!SingleWinnerInvariant::holds(&"XXX/OOO/...".parse().unwrap()));
    }
}

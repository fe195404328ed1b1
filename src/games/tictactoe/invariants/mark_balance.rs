//! Mark-balance invariant: turns alternate starting with crosses.

use super::super::{BoardState, Cell, Player};
use super::Invariant;

/// Invariant: crosses lead circles by zero or one mark.
pub struct MarkBalanceInvariant;

impl MarkBalanceInvariant {
    fn count(board: &BoardState, player: Player) -> usize {
        board
            .rows()
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Marked(player))
            .count()
    }
}

impl Invariant<BoardState> for MarkBalanceInvariant {
    fn holds(board: &BoardState) -> bool {
        let crosses = Self::count(board, Player::PlayerA);
        let circles = Self::count(board, Player::PlayerB);
        crosses == circles || crosses == circles + 1
    }

    fn description() -> &'static str {
        "Crosses lead circles by at most one mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_boards_hold() {
        assert!(MarkBalanceInvariant::holds(&BoardState::new()));
        assert!(MarkBalanceInvariant::holds(&"X../.../...".parse().unwrap()));
        assert!(MarkBalanceInvariant::holds(&"XO./.../...".parse().unwrap()));
    }

    #[test]
    fn test_circles_first_violates() {
        assert!(!MarkBalanceInvariant::holds(&"O../.../...".parse().unwrap()));
    }

    #[test]
    fn test_double_move_violates() {
        assert!(!MarkBalanceInvariant::holds(&"XX./.../...".parse().unwrap()));
    }
}

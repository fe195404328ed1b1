//! Draw detection logic for tic-tac-toe.

use super::super::BoardState;
use super::win::check_winner;

/// A full board with no completed line.
pub fn is_draw(board: &BoardState) -> bool {
    board.is_full() && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&BoardState::new()));
    }

    #[test]
    fn test_draw_detection() {
        let board: BoardState = "XOX/XOO/OXX".parse().unwrap();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full board where X holds the main diagonal.
        let board: BoardState = "XOO/OXX/XOX".parse().unwrap();
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }
}

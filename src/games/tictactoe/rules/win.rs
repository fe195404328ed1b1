//! Win detection logic for tic-tac-toe.

use super::super::position::Coord;
use super::super::{BoardState, Cell, Player};
use serde::{Deserialize, Serialize};

/// One of the eight lines that can complete a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Vertical line through the given column.
    Column(usize),
    /// Horizontal line through the given row.
    Row(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Bottom-left to top-right.
    AntiDiagonal,
}

impl Line {
    /// Lines in the order they are checked: columns, rows, then diagonals.
    pub const CHECK_ORDER: [Line; 8] = [
        Line::Column(0),
        Line::Column(1),
        Line::Column(2),
        Line::Row(0),
        Line::Row(1),
        Line::Row(2),
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// The three cells on this line, from one endpoint to the other.
    pub fn cells(self) -> [Coord; 3] {
        match self {
            Line::Column(col) => [(0, col), (1, col), (2, col)],
            Line::Row(row) => [(row, 0), (row, 1), (row, 2)],
            Line::MainDiagonal => [(0, 0), (1, 1), (2, 2)],
            Line::AntiDiagonal => [(2, 0), (1, 1), (0, 2)],
        }
    }

    /// First and last cell of the line.
    pub fn endpoints(self) -> (Coord, Coord) {
        let [start, _, end] = self.cells();
        (start, end)
    }
}

/// A completed line and the player who owns it.
///
/// Consumed by renderers that draw a stroke through the winning cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    /// Player holding all three cells.
    pub owner: Player,
    /// Geometry of the line.
    pub line: Line,
}

impl WinningLine {
    /// Start and end cells to draw between.
    pub fn endpoints(&self) -> (Coord, Coord) {
        self.line.endpoints()
    }

    /// The three cells of the line.
    pub fn cells(&self) -> [Coord; 3] {
        self.line.cells()
    }

    /// True when `coord` lies on the line.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells().contains(&coord)
    }
}

/// Finds the first completed line in check order.
pub fn find_winning_line(board: &BoardState) -> Option<WinningLine> {
    Line::CHECK_ORDER.into_iter().find_map(|line| {
        let [a, b, c] = line.cells().map(|(row, col)| board.cell(row, col));
        match (a, b, c) {
            (Some(Cell::Marked(p1)), Some(Cell::Marked(p2)), Some(Cell::Marked(p3)))
                if p1 == p2 && p2 == p3 =>
            {
                Some(WinningLine { owner: p1, line })
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &BoardState) -> Option<Player> {
    find_winning_line(board).map(|won| won.owner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &str) -> BoardState {
        rows.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&BoardState::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let won = find_winning_line(&board("XXX/OO./...")).unwrap();
        assert_eq!(won.owner, Player::PlayerA);
        assert_eq!(won.line, Line::Row(0));
        assert_eq!(won.endpoints(), ((0, 0), (0, 2)));
    }

    #[test]
    fn test_winner_anti_diagonal_endpoints() {
        let won = find_winning_line(&board("XXO/XO./O..")).unwrap();
        assert_eq!(won.owner, Player::PlayerB);
        assert_eq!(won.line, Line::AntiDiagonal);
        assert_eq!(won.endpoints(), ((2, 0), (0, 2)));
        assert!(won.contains((1, 1)));
        assert!(!won.contains((0, 0)));
    }

    #[test]
    fn test_columns_reported_before_rows() {
        // Column 0 and row 0 both complete; column wins the tie.
        let won = find_winning_line(&board("XXX/XOO/XOO")).unwrap();
        assert_eq!(won.line, Line::Column(0));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board("XX./O../...")), None);
    }
}

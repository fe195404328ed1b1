//! Named board positions for keyboard and mouse navigation.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the square grid.
pub const SIZE: usize = 3;

/// A `(row, col)` coordinate on the grid, both in `0..3`.
pub type Coord = (usize, usize);

/// A position on the tic-tac-toe board.
///
/// Row-major order: `TopLeft` is `(0, 0)`, `BottomRight` is `(2, 2)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (0, 0)
    TopLeft,
    /// Top-center (0, 1)
    TopCenter,
    /// Top-right (0, 2)
    TopRight,
    /// Middle-left (1, 0)
    MiddleLeft,
    /// Center (1, 1)
    Center,
    /// Middle-right (1, 2)
    MiddleRight,
    /// Bottom-left (2, 0)
    BottomLeft,
    /// Bottom-center (2, 1)
    BottomCenter,
    /// Bottom-right (2, 2)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Row-major index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from row-major index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a `(row, col)` pair.
    #[instrument]
    pub fn from_coord((row, col): Coord) -> Option<Self> {
        if row >= SIZE || col >= SIZE {
            return None;
        }
        Self::from_index(row * SIZE + col)
    }

    /// Row of this position.
    pub fn row(self) -> usize {
        self.to_index() / SIZE
    }

    /// Column of this position.
    pub fn col(self) -> usize {
        self.to_index() % SIZE
    }

    /// The `(row, col)` pair for this position.
    pub fn coord(self) -> Coord {
        (self.row(), self.col())
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_round_trip_corners() {
        assert_eq!(Position::TopLeft.coord(), (0, 0));
        assert_eq!(Position::MiddleRight.coord(), (1, 2));
        assert_eq!(Position::BottomRight.coord(), (2, 2));
        assert_eq!(Position::from_coord((2, 0)), Some(Position::BottomLeft));
    }

    #[test]
    fn test_from_coord_out_of_range() {
        assert_eq!(Position::from_coord((3, 0)), None);
        assert_eq!(Position::from_coord((0, 3)), None);
    }

    #[test]
    fn test_iteration_is_row_major() {
        use strum::IntoEnumIterator;
        for (index, position) in Position::iter().enumerate() {
            assert_eq!(position.to_index(), index);
            assert_eq!(Position::from_index(index), Some(position));
        }
    }
}

//! The 3x3 grid and its occupied-cell count.

use super::action::InvalidMove;
use super::position::{Coord, SIZE};
use super::rules::{self, WinningLine};
use super::{Cell, Outcome, Player};
use serde::Serialize;
use tracing::{instrument, trace};

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// 3x3 tic-tac-toe board.
///
/// `Clone` produces an independent deep copy, which is how the search
/// explores hypothetical futures without touching the real board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BoardState {
    /// Cells in row-major order.
    grid: [[Cell; SIZE]; SIZE],
    /// Count of non-empty cells in `grid`.
    occupied: usize,
}

impl BoardState {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            grid: [[Cell::Empty; SIZE]; SIZE],
            occupied: 0,
        }
    }

    /// Claims the cell at `(row, col)` for `player`.
    ///
    /// Fails without touching the board if the coordinates are off the grid
    /// or the cell is already marked.
    pub fn mark(&mut self, row: usize, col: usize, player: Player) -> Result<(), InvalidMove> {
        let cell = self
            .grid
            .get_mut(row)
            .and_then(|cells| cells.get_mut(col))
            .ok_or(InvalidMove::OutOfBounds { row, col })?;

        if let Cell::Marked(owner) = *cell {
            return Err(InvalidMove::Occupied { row, col, owner });
        }

        *cell = Cell::Marked(player);
        self.occupied += 1;
        trace!(row, col, %player, occupied = self.occupied, "Cell marked");
        Ok(())
    }

    /// Returns the cell at `(row, col)`, or `None` off the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row)?.get(col).copied()
    }

    /// True when `(row, col)` is on the grid and unmarked.
    pub fn is_empty_cell(&self, row: usize, col: usize) -> bool {
        matches!(self.cell(row, col), Some(Cell::Empty))
    }

    /// All empty coordinates in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        let mut cells = Vec::with_capacity(CELLS - self.occupied);
        for (row, cols) in self.grid.iter().enumerate() {
            for (col, cell) in cols.iter().enumerate() {
                if *cell == Cell::Empty {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    /// Number of marked cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// True when every cell is marked.
    pub fn is_full(&self) -> bool {
        self.occupied == CELLS
    }

    /// True when no cell is marked.
    pub fn is_empty_board(&self) -> bool {
        self.occupied == 0
    }

    /// Derives the current outcome from the grid.
    pub fn evaluate(&self) -> Outcome {
        rules::evaluate(self)
    }

    /// The line that `evaluate` reports as won, for drawing.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::find_winning_line(self)
    }

    /// Whose turn it is under strict alternation from `PlayerA`.
    pub fn to_move(&self) -> Player {
        if self.occupied % 2 == 0 {
            Player::PlayerA
        } else {
            Player::PlayerB
        }
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.grid
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.grid.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Marked(player) => player.symbol(),
                };
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

/// Failure to read a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// A character other than `X`, `O`, `.`, `_` or `-` appeared.
    #[display("Unexpected character {:?} in board text", _0)]
    UnexpectedChar(#[error(not(source))] char),
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(#[error(not(source))] usize),
}

impl std::str::FromStr for BoardState {
    type Err = ParseBoardError;

    /// Reads nine cells in row-major order.
    ///
    /// `X`/`x` and `O`/`o` are marks; `.`, `_` and `-` are empty. Whitespace,
    /// `/` and `|` are ignored so `"XOX/XOO/OXX"` and multi-line text both parse.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELLS);
        for c in s.chars() {
            let cell = match c {
                'X' | 'x' => Cell::Marked(Player::PlayerA),
                'O' | 'o' => Cell::Marked(Player::PlayerB),
                '.' | '_' | '-' => Cell::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(ParseBoardError::UnexpectedChar(other)),
            };
            cells.push(cell);
        }

        if cells.len() != CELLS {
            return Err(ParseBoardError::WrongCellCount(cells.len()));
        }

        let mut board = Self::new();
        for (index, cell) in cells.into_iter().enumerate() {
            if let Cell::Marked(player) = cell {
                board.grid[index / SIZE][index % SIZE] = Cell::Marked(player);
                board.occupied += 1;
            }
        }
        Ok(board)
    }
}

//! Occupied-count invariant: the cached count matches the grid.

use super::super::{BoardState, Cell, CELLS};
use super::Invariant;

/// Invariant: `occupied_count` equals the number of marked cells, and
/// together with the empty cells accounts for the whole board.
pub struct OccupiedCountInvariant;

impl Invariant<BoardState> for OccupiedCountInvariant {
    fn holds(board: &BoardState) -> bool {
        let marked = board
            .rows()
            .iter()
            .flatten()
            .filter(|cell| **cell != Cell::Empty)
            .count();

        marked == board.occupied_count() && board.empty_cells().len() + marked == CELLS
    }

    fn description() -> &'static str {
        "Occupied count matches the marked cells"
    }
}

//! First-class invariants for the tic-tac-toe board.
//!
//! Invariants are logical properties that must hold for every reachable
//! board. They are testable independently and serve as documentation of
//! the guarantees the search relies on.

use super::BoardState;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod mark_balance;
pub mod occupied_count;
pub mod single_winner;

pub use mark_balance::MarkBalanceInvariant;
pub use occupied_count::OccupiedCountInvariant;
pub use single_winner::SingleWinnerInvariant;

/// Every invariant of a board reached through alternating play.
pub type BoardInvariants = (
    OccupiedCountInvariant,
    MarkBalanceInvariant,
    SingleWinnerInvariant,
);

/// Asserts that a board reached by legal play satisfies [`BoardInvariants`].
///
/// Violations are logged; debug builds also panic.
#[instrument(skip(board))]
pub fn assert_invariants(board: &BoardState) {
    if let Err(violations) = BoardInvariants::check_all(board) {
        let descriptions = violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%board, violations = %descriptions, "Board invariants violated");
        debug_assert!(false, "Board invariants violated: {}", descriptions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_set_holds_for_empty_board() {
        assert!(BoardInvariants::check_all(&BoardState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let board: BoardState = "X.X/.O./...".parse().unwrap();
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        // Two more crosses than circles, and both players hold a row.
        let board: BoardState = "XXX/OOO/XX.".parse().unwrap();
        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (OccupiedCountInvariant, SingleWinnerInvariant);
        assert!(TwoInvariants::check_all(&BoardState::new()).is_ok());
    }
}

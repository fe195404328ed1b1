//! The computer opponent.

use super::minimax::{self, Score, SearchStats};
use super::strategy::{Strategy, UnknownLevel};
use crate::games::tictactoe::{BoardState, Coord, Outcome, Player};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// `decide` was called on a board that admits no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum NoLegalMove {
    /// The board already has a result.
    #[display("Game is already over ({})", _0)]
    Terminal(#[error(not(source))] Outcome),
    /// The board has no empty cell left.
    #[display("No empty cell remains")]
    BoardFull,
}

/// A chosen move together with how it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// Row of the chosen cell.
    pub row: usize,
    /// Column of the chosen cell.
    pub col: usize,
    /// Strategy that produced the move.
    pub strategy: Strategy,
    /// Minimax value of the move; `None` for random play.
    pub evaluation: Option<Score>,
    /// Boards visited by the search.
    pub nodes: u64,
}

impl Decision {
    /// The `(row, col)` of the chosen cell.
    pub fn coord(&self) -> Coord {
        (self.row, self.col)
    }
}

/// Computer player bound to one side of the board.
///
/// Each game session owns its engine; nothing is shared between sessions.
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    strategy: Strategy,
    acting_player: Player,
    rng: SmallRng,
}

impl DecisionEngine {
    /// Creates an engine seeded from system entropy.
    #[instrument]
    pub fn new(strategy: Strategy, acting_player: Player) -> Self {
        Self {
            strategy,
            acting_player,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates an engine whose random choices are reproducible.
    #[instrument]
    pub fn with_seed(strategy: Strategy, acting_player: Player, seed: u64) -> Self {
        Self {
            strategy,
            acting_player,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Current strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Side this engine plays.
    pub fn acting_player(&self) -> Player {
        self.acting_player
    }

    /// Switches strategy for subsequent decisions.
    #[instrument(skip(self), fields(from = %self.strategy))]
    pub fn set_strategy(&mut self, strategy: Strategy) {
        info!(to = %strategy, "Engine strategy changed");
        self.strategy = strategy;
    }

    /// Switches strategy by numeric level (`0` random, `1` exhaustive).
    #[instrument(skip(self))]
    pub fn set_level(&mut self, level: u8) -> Result<(), UnknownLevel> {
        let strategy = Strategy::from_level(level)?;
        self.set_strategy(strategy);
        Ok(())
    }

    /// Picks a cell for `acting_player` on `board`.
    pub fn decide(&mut self, board: &BoardState) -> Result<Coord, NoLegalMove> {
        self.decide_with_evaluation(board).map(|decision| decision.coord())
    }

    /// Picks a cell and reports the search value behind it.
    #[instrument(skip(self, board), fields(strategy = %self.strategy, player = %self.acting_player))]
    pub fn decide_with_evaluation(&mut self, board: &BoardState) -> Result<Decision, NoLegalMove> {
        let outcome = board.evaluate();
        if outcome.is_terminal() {
            return Err(NoLegalMove::Terminal(outcome));
        }

        let empty = board.empty_cells();
        if empty.is_empty() {
            return Err(NoLegalMove::BoardFull);
        }

        let decision = match self.strategy {
            Strategy::Random => {
                let (row, col) = empty[self.rng.gen_range(0..empty.len())];
                Decision {
                    row,
                    col,
                    strategy: Strategy::Random,
                    evaluation: None,
                    nodes: 0,
                }
            }
            Strategy::ExhaustiveSearch => {
                let maximizing = self.acting_player == Player::PlayerA;
                let mut stats = SearchStats::default();
                let evaluation = minimax::minimax_with_stats(board, maximizing, &mut stats);
                debug!(nodes = stats.nodes, plies = evaluation.plies, "Search finished");

                let Some((row, col)) = evaluation.best_move else {
                    debug_assert!(false, "search returned no move on a live board");
                    return Err(NoLegalMove::BoardFull);
                };
                Decision {
                    row,
                    col,
                    strategy: Strategy::ExhaustiveSearch,
                    evaluation: Some(evaluation.value),
                    nodes: stats.nodes,
                }
            }
        };

        info!(
            row = decision.row,
            col = decision.col,
            evaluation = ?decision.evaluation,
            "Engine chose cell"
        );
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &str) -> BoardState {
        rows.parse().unwrap()
    }

    #[test]
    fn test_decide_on_full_board() {
        let mut engine = DecisionEngine::new(Strategy::ExhaustiveSearch, Player::PlayerA);
        assert_eq!(
            engine.decide(&board("XOX/XOO/OXX")),
            Err(NoLegalMove::Terminal(Outcome::Draw))
        );
    }

    #[test]
    fn test_decide_on_won_board() {
        let mut engine = DecisionEngine::new(Strategy::Random, Player::PlayerB);
        assert_eq!(
            engine.decide(&board("XXX/OO./...")),
            Err(NoLegalMove::Terminal(Outcome::Win(Player::PlayerA)))
        );
    }

    #[test]
    fn test_random_picks_only_empty_cell() {
        let mut engine = DecisionEngine::new(Strategy::Random, Player::PlayerA);
        // One cell left and no line completed.
        let last = board("XOX/XOO/OX.");
        for _ in 0..10 {
            assert_eq!(engine.decide(&last), Ok((2, 2)));
        }
    }

    #[test]
    fn test_random_decision_has_no_evaluation() {
        let mut engine = DecisionEngine::with_seed(Strategy::Random, Player::PlayerA, 3);
        let decision = engine.decide_with_evaluation(&BoardState::new()).unwrap();
        assert_eq!(decision.evaluation, None);
        assert_eq!(decision.strategy, Strategy::Random);
    }

    #[test]
    fn test_circles_minimize() {
        // Crosses threaten the top row.
        let mut engine = DecisionEngine::new(Strategy::ExhaustiveSearch, Player::PlayerB);
        let decision = engine.decide_with_evaluation(&board("XX./.O./...")).unwrap();
        assert_eq!(decision.coord(), (0, 2));
        assert_eq!(decision.evaluation, Some(minimax::DRAW));
    }

    #[test]
    fn test_set_level_switches_strategy() {
        let mut engine = DecisionEngine::new(Strategy::ExhaustiveSearch, Player::PlayerB);
        engine.set_level(0).unwrap();
        assert_eq!(engine.strategy(), Strategy::Random);
        assert_eq!(engine.set_level(2), Err(UnknownLevel(2)));
        assert_eq!(engine.strategy(), Strategy::Random);
    }
}

//! Exhaustive minimax over the tic-tac-toe game tree.
//!
//! Values are always from crosses' point of view: `+1` when
//! [`Player::PlayerA`] wins, `-1` when [`Player::PlayerB`] wins, `0` for a
//! draw. The maximizing side places crosses, the minimizing side circles.
//!
//! Among moves of equal value the search prefers the quickest win and the
//! slowest loss, then the first move in row-major order. Without the plies
//! rule a forced win three plies away would shadow an immediate one.
//!
//! Every candidate move is tried on a fresh clone of the board, so no branch
//! ever needs to undo a mark. There is no pruning, memoization or depth
//! limit: the full tree from an empty board is 549,946 nodes.

use crate::games::tictactoe::{BoardState, Coord, Outcome, Player};
use serde::Serialize;

/// Game-theoretic value of a position.
pub type Score = i8;

/// Value of a position crosses have won.
pub const PLAYER_A_WIN: Score = 1;
/// Value of a drawn position.
pub const DRAW: Score = 0;
/// Value of a position circles have won.
pub const PLAYER_B_WIN: Score = -1;

/// Result of a search: the value and the move that achieves it.
///
/// `best_move` is `None` exactly when the searched board was terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Value under optimal play by both sides.
    pub value: Score,
    /// Moves left until the game ends along the chosen line.
    pub plies: u8,
    /// Move that reaches `value`.
    pub best_move: Option<Coord>,
}

impl Evaluation {
    fn terminal(value: Score) -> Self {
        Self {
            value,
            plies: 0,
            best_move: None,
        }
    }

    /// True if `self` is a strictly better result than `other` for the side
    /// choosing between them.
    fn beats(&self, other: &Evaluation, maximizing: bool) -> bool {
        let (mine, theirs) = if maximizing {
            (self.value, other.value)
        } else {
            (-self.value, -other.value)
        };

        if mine != theirs {
            return mine > theirs;
        }
        match mine {
            v if v > 0 => self.plies < other.plies,
            v if v < 0 => self.plies > other.plies,
            _ => false,
        }
    }
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Boards visited, including the root.
    pub nodes: u64,
}

/// Value assigned to a win by `player`.
pub fn win_score(player: Player) -> Score {
    match player {
        Player::PlayerA => PLAYER_A_WIN,
        Player::PlayerB => PLAYER_B_WIN,
    }
}

/// Searches `board` to the end of the game.
///
/// `maximizing` is true when crosses are about to move.
pub fn minimax(board: &BoardState, maximizing: bool) -> Evaluation {
    let mut stats = SearchStats::default();
    minimax_with_stats(board, maximizing, &mut stats)
}

/// Same as [`minimax`], accumulating visit counts into `stats`.
pub fn minimax_with_stats(
    board: &BoardState,
    maximizing: bool,
    stats: &mut SearchStats,
) -> Evaluation {
    stats.nodes += 1;

    match board.evaluate() {
        Outcome::Win(winner) => return Evaluation::terminal(win_score(winner)),
        Outcome::Draw => return Evaluation::terminal(DRAW),
        Outcome::NoResult => {}
    }

    let mover = if maximizing {
        Player::PlayerA
    } else {
        Player::PlayerB
    };

    let mut best: Option<Evaluation> = None;
    for (row, col) in board.empty_cells() {
        let mut hypothetical = board.clone();
        // empty_cells only yields unmarked, in-range cells.
        let Ok(()) = hypothetical.mark(row, col, mover) else {
            continue;
        };

        let reply = minimax_with_stats(&hypothetical, !maximizing, stats);
        let candidate = Evaluation {
            value: reply.value,
            plies: reply.plies + 1,
            best_move: Some((row, col)),
        };
        if best.is_none_or(|current| candidate.beats(&current, maximizing)) {
            best = Some(candidate);
        }
    }

    best.unwrap_or(Evaluation::terminal(DRAW))
}

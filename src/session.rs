//! Game session: one board, one engine, strict turn alternation.

use crate::ai::{Decision, DecisionEngine, NoLegalMove, UnknownLevel};
use crate::config::{ConfigError, GameConfig};
use crate::games::tictactoe::invariants::assert_invariants;
use crate::games::tictactoe::{BoardState, InvalidMove, Move, Outcome, Player, WinningLine};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who plays against whom.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameMode {
    /// Two humans share the board.
    Pvp,
    /// A human plays against the engine.
    #[default]
    Ai,
}

impl GameMode {
    /// Toggles between `Pvp` and `Ai`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Pvp => Self::Ai,
            Self::Ai => Self::Pvp,
        }
    }
}

/// Why a session refused to advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SessionError {
    /// The board rejected the mark.
    #[display("{}", _0)]
    InvalidMove(InvalidMove),
    /// The engine had nothing to play.
    #[display("{}", _0)]
    NoLegalMove(NoLegalMove),
    /// The game has finished; restart before marking again.
    #[from(ignore)]
    #[display("Game is over: {}", _0)]
    GameOver(#[error(not(source))] Outcome),
}

/// A single game between two players, one of which may be the engine.
///
/// Owns its board and engine outright; resetting replaces the board and
/// keeps the engine configuration.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: BoardState,
    engine: DecisionEngine,
    to_move: Player,
    mode: GameMode,
    running: bool,
}

impl GameSession {
    /// Creates a session from configuration.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let engine = config.build_engine()?;
        Ok(Self::with_engine(engine, *config.mode()))
    }

    /// Creates a session around an existing engine.
    #[instrument(skip(engine), fields(player = %engine.acting_player(), strategy = %engine.strategy()))]
    pub fn with_engine(engine: DecisionEngine, mode: GameMode) -> Self {
        info!(%mode, "Starting game session");
        Self {
            board: BoardState::new(),
            engine,
            to_move: Player::PlayerA,
            mode,
            running: true,
        }
    }

    /// The board.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// The engine.
    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }

    /// Player to move next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Current game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// False once the game has reached a terminal state.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Outcome of the board as it stands.
    pub fn outcome(&self) -> Outcome {
        self.board.evaluate()
    }

    /// Completed line to highlight, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }

    /// Marks `(row, col)` for the player to move and passes the turn.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<Outcome, SessionError> {
        if !self.running {
            let outcome = self.outcome();
            warn!(%outcome, "Move rejected: game is over");
            return Err(SessionError::GameOver(outcome));
        }

        self.board.mark(row, col, self.to_move)?;
        assert_invariants(&self.board);
        self.to_move = self.to_move.opponent();

        let outcome = self.board.evaluate();
        if outcome.is_terminal() {
            info!(%outcome, "Game over");
            self.running = false;
        }
        Ok(outcome)
    }

    /// True when the engine should move now.
    pub fn is_engine_turn(&self) -> bool {
        self.mode == GameMode::Ai && self.running && self.to_move == self.engine.acting_player()
    }

    /// Lets the engine move if it is its turn.
    ///
    /// Returns `None` without touching the board otherwise.
    #[instrument(skip(self))]
    pub fn play_engine_turn(&mut self) -> Result<Option<Decision>, SessionError> {
        if !self.is_engine_turn() {
            return Ok(None);
        }

        let decision = self.engine.decide_with_evaluation(&self.board)?;
        self.make_move(decision.row, decision.col)?;
        Ok(Some(decision))
    }

    /// Switches between two-human and versus-engine play.
    #[instrument(skip(self))]
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggle();
        info!(mode = %self.mode, "Game mode changed");
    }

    /// Changes the engine level (`0` random, `1` exhaustive).
    pub fn set_level(&mut self, level: u8) -> Result<(), UnknownLevel> {
        self.engine.set_level(level)
    }

    /// Starts a fresh game with the same mode and engine.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.board = BoardState::new();
        self.to_move = Player::PlayerA;
        self.running = true;
    }
}

/// Moves and result of a finished engine-versus-engine game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// Moves in the order they were played.
    pub moves: Vec<Move>,
    /// Final result.
    pub outcome: Outcome,
}

/// Plays one game from an empty board between two engines.
///
/// Each turn goes to the engine whose `acting_player` is to move.
#[instrument(skip_all, fields(x = %crosses.strategy(), o = %circles.strategy()))]
pub fn play_match(
    crosses: &mut DecisionEngine,
    circles: &mut DecisionEngine,
) -> Result<MatchRecord, SessionError> {
    let mut board = BoardState::new();
    let mut moves = Vec::new();
    let mut to_move = Player::PlayerA;

    while !board.evaluate().is_terminal() {
        let engine = if crosses.acting_player() == to_move {
            &mut *crosses
        } else {
            &mut *circles
        };
        let (row, col) = engine.decide(&board)?;
        board.mark(row, col, to_move)?;
        moves.push(Move::new(to_move, (row, col)));
        to_move = to_move.opponent();
    }

    let outcome = board.evaluate();
    debug!(%outcome, moves = moves.len(), "Match finished");
    Ok(MatchRecord { moves, outcome })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Strategy;

    fn session(mode: GameMode) -> GameSession {
        let engine = DecisionEngine::with_seed(Strategy::ExhaustiveSearch, Player::PlayerB, 1);
        GameSession::with_engine(engine, mode)
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = session(GameMode::Pvp);
        assert_eq!(session.to_move(), Player::PlayerA);
        session.make_move(1, 1).unwrap();
        assert_eq!(session.to_move(), Player::PlayerB);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut session = session(GameMode::Pvp);
        session.make_move(0, 0).unwrap();
        assert!(matches!(
            session.make_move(0, 0),
            Err(SessionError::InvalidMove(InvalidMove::Occupied { .. }))
        ));
        assert_eq!(session.to_move(), Player::PlayerB);
    }

    #[test]
    fn test_terminal_state_is_absorbing() {
        let mut session = session(GameMode::Pvp);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            session.make_move(row, col).unwrap();
        }
        assert!(!session.is_running());
        assert_eq!(session.outcome(), Outcome::Win(Player::PlayerA));
        assert_eq!(
            session.make_move(2, 2),
            Err(SessionError::GameOver(Outcome::Win(Player::PlayerA)))
        );
    }

    #[test]
    fn test_engine_waits_for_its_turn() {
        let mut session = session(GameMode::Ai);
        assert!(!session.is_engine_turn());
        assert_eq!(session.play_engine_turn(), Ok(None));

        session.make_move(0, 0).unwrap();
        assert!(session.is_engine_turn());
        let decision = session.play_engine_turn().unwrap().unwrap();
        assert_eq!(decision.coord(), (1, 1));
        assert_eq!(session.to_move(), Player::PlayerA);
    }

    #[test]
    fn test_pvp_never_hands_turn_to_engine() {
        let mut session = session(GameMode::Pvp);
        session.make_move(0, 0).unwrap();
        assert!(!session.is_engine_turn());
        session.toggle_mode();
        assert!(session.is_engine_turn());
    }

    #[test]
    fn test_reset_keeps_mode_and_engine() {
        let mut session = session(GameMode::Ai);
        session.set_level(0).unwrap();
        session.make_move(2, 2).unwrap();
        session.reset();
        assert!(session.board().is_empty_board());
        assert!(session.is_running());
        assert_eq!(session.to_move(), Player::PlayerA);
        assert_eq!(session.mode(), GameMode::Ai);
        assert_eq!(session.engine().strategy(), Strategy::Random);
    }
}

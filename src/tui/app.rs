//! Application state and logic.

use super::input::{self, Action};
use crate::games::tictactoe::{Outcome, Position};
use crate::session::{GameMode, GameSession};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tracing::{debug, warn};

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: Position,
    status_message: String,
    quit: bool,
}

impl App {
    /// Creates a new application around a session.
    pub fn new(session: GameSession) -> Self {
        let mut app = Self {
            session,
            cursor: Position::Center,
            status_message: String::new(),
            quit: false,
        };
        app.status_message = app.turn_message();
        app
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = input::action_for_key(self.cursor, key) else {
            return;
        };
        debug!(?action, "Handling key action");

        match action {
            Action::Cursor(position) => self.cursor = position,
            Action::Place => self.place(self.cursor),
            Action::ToggleMode => {
                self.session.toggle_mode();
                self.status_message = self.turn_message();
            }
            Action::Restart => self.restart(),
            Action::Level(level) => match self.session.set_level(level) {
                Ok(()) => {
                    self.status_message =
                        format!("Engine level {} ({})", level, self.session.engine().strategy());
                }
                Err(e) => self.status_message = e.to_string(),
            },
            Action::Quit => self.quit = true,
        }
    }

    /// Handles a left click at a terminal coordinate.
    pub fn handle_click(&mut self, board_area: Rect, x: u16, y: u16) {
        if let Some(position) = input::cell_at(board_area, x, y) {
            self.cursor = position;
            self.place(position);
        }
    }

    /// Marks `position` for the human whose turn it is.
    fn place(&mut self, position: Position) {
        if !self.session.is_running() {
            self.status_message = self.result_message(self.session.outcome());
            return;
        }
        if self.session.is_engine_turn() {
            return;
        }

        let (row, col) = position.coord();
        match self.session.make_move(row, col) {
            Ok(outcome) if outcome.is_terminal() => {
                self.status_message = self.result_message(outcome);
            }
            Ok(_) => self.status_message = self.turn_message(),
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.status_message = e.to_string();
            }
        }
    }

    /// Lets the engine move if it is its turn.
    pub fn engine_turn(&mut self) {
        match self.session.play_engine_turn() {
            Ok(Some(decision)) => {
                let outcome = self.session.outcome();
                self.status_message = if outcome.is_terminal() {
                    self.result_message(outcome)
                } else {
                    format!(
                        "Engine played {}. {}",
                        Position::from_coord(decision.coord())
                            .map(|p| p.label())
                            .unwrap_or("?"),
                        self.turn_message()
                    )
                };
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "Engine failed to move");
                self.status_message = e.to_string();
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.reset();
        self.cursor = Position::Center;
        self.status_message = format!("Game restarted. {}", self.turn_message());
    }

    fn turn_message(&self) -> String {
        let mode = match self.session.mode() {
            GameMode::Pvp => "two players",
            GameMode::Ai => "vs engine",
        };
        format!("{} to move ({})", self.session.to_move(), mode)
    }

    fn result_message(&self, outcome: Outcome) -> String {
        match outcome {
            Outcome::Win(player) => format!("{} wins! Press 'r' to restart or 'q' to quit.", player),
            Outcome::Draw => "Game ended in a draw! Press 'r' to restart or 'q' to quit.".to_string(),
            Outcome::NoResult => self.turn_message(),
        }
    }
}

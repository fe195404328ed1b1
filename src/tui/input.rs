//! Keyboard and mouse input mapping.

use crate::games::tictactoe::{Position, SIZE};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to a new cell.
    Cursor(Position),
    /// Mark the cell under the cursor.
    Place,
    /// Toggle between pvp and ai.
    ToggleMode,
    /// Start a new game.
    Restart,
    /// Set the engine level.
    Level(u8),
    /// Leave the program.
    Quit,
}

/// Maps a key to an action given the current cursor.
pub fn action_for_key(cursor: Position, key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('g') => Some(Action::ToggleMode),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('0') => Some(Action::Level(0)),
        KeyCode::Char('1') => Some(Action::Level(1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Place),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::Cursor(move_cursor(cursor, key)))
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = cursor.coord();
    let last = SIZE - 1;
    let target = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(last), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(last)),
        _ => (row, col),
    };
    Position::from_coord(target).unwrap_or(cursor)
}

/// Width of one cell on screen.
pub const CELL_WIDTH: u16 = 12;
/// Height of one cell on screen.
pub const CELL_HEIGHT: u16 = 3;

/// Finds the cell under a terminal coordinate inside the board area.
///
/// Separator rows and columns belong to no cell.
pub fn cell_at(board_area: Rect, x: u16, y: u16) -> Option<Position> {
    let dx = x.checked_sub(board_area.x)?;
    let dy = y.checked_sub(board_area.y)?;

    let col = usize::from(dx / (CELL_WIDTH + 1));
    let row = usize::from(dy / (CELL_HEIGHT + 1));
    let on_separator = dx % (CELL_WIDTH + 1) == CELL_WIDTH || dy % (CELL_HEIGHT + 1) == CELL_HEIGHT;
    if on_separator {
        return None;
    }
    Position::from_coord((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_and_clamps() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(action_for_key(Position::Center, KeyCode::Char('g')), Some(Action::ToggleMode));
        assert_eq!(action_for_key(Position::Center, KeyCode::Char('0')), Some(Action::Level(0)));
        assert_eq!(action_for_key(Position::Center, KeyCode::Enter), Some(Action::Place));
        assert_eq!(action_for_key(Position::Center, KeyCode::Char('z')), None);
    }

    #[test]
    fn test_cell_at() {
        let area = Rect::new(10, 5, 38, 11);
        assert_eq!(cell_at(area, 10, 5), Some(Position::TopLeft));
        assert_eq!(cell_at(area, 23, 9), Some(Position::Center));
        assert_eq!(cell_at(area, 47, 15), Some(Position::BottomRight));
        // Vertical separator between first and second column.
        assert_eq!(cell_at(area, 22, 5), None);
        assert_eq!(cell_at(area, 9, 5), None);
        assert_eq!(cell_at(area, 60, 5), None);
    }
}

//! Key mapping and cursor movement for keyboard navigation.

use super::app::{Action, Direction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_timeline::Position;

/// Moves the board cursor one step, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps a key event to an action. Returns `None` for unbound keys.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Move(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Move(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Move(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::ToggleFocus),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::PlayAt),
        KeyCode::Char('u') | KeyCode::Char('[') => Some(Action::StepBack),
        KeyCode::Char(']') => Some(Action::StepForward),
        KeyCode::Char('n') => Some(Action::NewGame),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Maps arrow keys (and vi keys) to a cursor delta as (row, col).
pub fn cursor_delta(key: KeyCode) -> Option<(isize, isize)> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some((-1, 0)),
        KeyCode::Down | KeyCode::Char('j') => Some((1, 0)),
        KeyCode::Left | KeyCode::Char('h') => Some((0, -1)),
        KeyCode::Right | KeyCode::Char('l') => Some((0, 1)),
        _ => None,
    }
}

//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Moves the board cursor with arrow keys or `hjkl`, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Left | KeyCode::Char('h') => Position::from_row_col(row, col.wrapping_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => Position::from_row_col(row, col + 1),
        KeyCode::Up | KeyCode::Char('k') => Position::from_row_col(row.wrapping_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => Position::from_row_col(row + 1, col),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// Moves the history selection up or down within `len` entries.
pub fn move_selection(selected: usize, len: usize, key: KeyCode) -> usize {
    match key {
        KeyCode::Up | KeyCode::Char('k') => selected.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => (selected + 1).min(len.saturating_sub(1)),
        KeyCode::Home => 0,
        KeyCode::End => len.saturating_sub(1),
        _ => selected,
    }
}

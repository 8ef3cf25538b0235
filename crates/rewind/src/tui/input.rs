//! Keyboard mapping for board and move-list navigation.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Moves the board cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => Position::from_row_col(row.wrapping_sub(1), col),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Left => Position::from_row_col(row, col.wrapping_sub(1)),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// Maps the digit keys 1-9 to cell indices 0-8.
pub fn digit_cell(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}

/// Moves a selection within `rows` display rows.
pub fn move_selection(row: usize, rows: usize, key: KeyCode) -> usize {
    let last = rows.saturating_sub(1);
    match key {
        KeyCode::Up => row.saturating_sub(1),
        KeyCode::Down => (row + 1).min(last),
        KeyCode::Home => 0,
        KeyCode::End => last,
        _ => row.min(last),
    }
}

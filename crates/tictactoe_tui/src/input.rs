//! Keyboard handling.

use crossterm::event::KeyCode;
use tictactoe_store::{AppState, Cell};
use tracing::debug;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Activate a cell.
    Move(Cell),
    /// Start a new game.
    Reset,
    /// Leave the program.
    Quit,
}

/// Moves the cursor with the arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Cell, key: KeyCode) -> Cell {
    let (x, y) = (cursor.x(), cursor.y());
    let target = match key {
        KeyCode::Left => x.checked_sub(1).map(|x| (x, y)),
        KeyCode::Right => Some((x + 1, y)),
        KeyCode::Up => y.checked_sub(1).map(|y| (x, y)),
        KeyCode::Down => Some((x, y + 1)),
        _ => None,
    };
    target
        .and_then(|(x, y)| Cell::new(x, y).ok())
        .unwrap_or(cursor)
}

/// Maps a key to an intent, updating the cursor for arrow keys.
///
/// Reset is only offered once the game has a winner.
pub fn handle_key(cursor: &mut Cell, key: KeyCode, state: &AppState) -> Option<Intent> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Char('r') if state.winner().is_some() => Some(Intent::Reset),
        KeyCode::Char('r') => {
            debug!("Reset requested before a winner, ignoring");
            None
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::Move(*cursor)),
        KeyCode::Char(c) => {
            let cell = c
                .to_digit(10)
                .and_then(|d| (d as usize).checked_sub(1))
                .and_then(Cell::from_index)?;
            *cursor = cell;
            Some(Intent::Move(cell))
        }
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            *cursor = move_cursor(*cursor, key);
            None
        }
        _ => None,
    }
}

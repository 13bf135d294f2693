//! What the screen shows, derived from a state snapshot.

use derive_getters::Getters;
use tictactoe_store::{AppState, Player, Square};

/// Text content of one frame, independent of layout and styling.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct View {
    /// Prompt for the player to move, or the winner announcement.
    header: String,
    /// Cell symbols by row.
    cells: [[&'static str; 3]; 3],
    /// Active error message.
    error: Option<String>,
    /// Whether the reset affordance is offered.
    show_reset: bool,
}

impl View {
    /// Builds the view for `state`.
    pub fn from_state(state: &AppState) -> Self {
        let header = match state.winner() {
            Some(winner) => format!("Player {} won!!", winner),
            None => format!("Player {} click:", state.player()),
        };

        let mut cells = [[""; 3]; 3];
        for (y, row) in state.board().rows().iter().enumerate() {
            for (x, square) in row.iter().enumerate() {
                cells[y][x] = symbol(*square);
            }
        }

        Self {
            header,
            cells,
            error: state.error().clone(),
            show_reset: state.winner().is_some(),
        }
    }
}

fn symbol(square: Square) -> &'static str {
    match square.player() {
        Some(Player::X) => "x",
        Some(Player::O) => "o",
        None => "",
    }
}

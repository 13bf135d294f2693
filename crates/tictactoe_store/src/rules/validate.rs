//! Move validation.

use super::{Effect, Rule};
use crate::action::Action;
use crate::state::AppState;
use tracing::{debug, instrument};

/// Message shown when a player picks an occupied cell.
pub const SQUARE_TAKEN: &str = "Square taken!";

/// Turns a player's click into a mark, or into an error if the cell is taken.
///
/// An accepted move is followed by a clear, so a stale error from an earlier
/// rejected click disappears as soon as play resumes.
#[derive(Debug, Clone, Copy, Default, derive_new::new)]
pub struct ValidateMove {
    lock_after_win: bool,
}

impl Rule for ValidateMove {
    fn name(&self) -> &'static str {
        "validate_move"
    }

    #[instrument(level = "debug", skip_all, fields(action = %action))]
    fn react(&self, action: &Action, state: &AppState) -> Vec<Effect> {
        let Action::PlayerAction(cell) = action else {
            return Vec::new();
        };

        if self.lock_after_win && state.winner.is_some() {
            debug!(cell = %cell, "Game is over, ignoring move");
            return Vec::new();
        }

        if !state.board.is_empty(*cell) {
            debug!(cell = %cell, "Square taken");
            return vec![Effect::Dispatch(Action::ReportError(SQUARE_TAKEN.to_string()))];
        }

        vec![
            Effect::Dispatch(Action::PlaceMark(*cell)),
            Effect::Dispatch(Action::ClearError),
        ]
    }
}

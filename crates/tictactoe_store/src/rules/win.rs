//! Win detection.

use super::{Effect, Rule};
use crate::action::Action;
use crate::state::AppState;
use tracing::{info, instrument};

/// Declares the mover the winner when a placed mark completes a line.
///
/// Stays silent once a winner is recorded, so a game declares at most one
/// winner even if play continues afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckWin;

impl Rule for CheckWin {
    fn name(&self) -> &'static str {
        "check_win"
    }

    #[instrument(level = "debug", skip_all, fields(action = %action))]
    fn react(&self, action: &Action, state: &AppState) -> Vec<Effect> {
        let Action::PlaceMark(cell) = action else {
            return Vec::new();
        };
        if state.winner.is_some() {
            return Vec::new();
        }

        let Some(line) = state.score.winning_line() else {
            return Vec::new();
        };
        let Some(mover) = state.board.get(*cell).player() else {
            return Vec::new();
        };

        info!(winner = %mover, line = %line, "Line complete");
        vec![Effect::Dispatch(Action::DeclareWinner(mover))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Cell;
    use crate::reducer::reduce;
    use crate::types::Player;

    fn cell(x: usize, y: usize) -> Cell {
        Cell::new(x, y).unwrap()
    }

    fn apply(state: AppState, x: usize, y: usize) -> (AppState, Vec<Effect>) {
        let action = Action::PlaceMark(cell(x, y));
        let next = reduce(&state, &action);
        let effects = CheckWin.react(&action, &next);
        (next, effects)
    }

    #[test]
    fn no_winner_before_line_is_complete() {
        let (state, effects) = apply(AppState::new(), 0, 0);
        assert!(effects.is_empty());
        let (_, effects) = apply(state, 1, 1);
        assert!(effects.is_empty());
    }

    #[test]
    fn o_completes_a_column() {
        let mut state = AppState::new();
        for (x, y) in [(0, 0), (2, 0), (1, 0), (2, 1), (0, 2)] {
            let (next, effects) = apply(state, x, y);
            assert!(effects.is_empty());
            state = next;
        }
        let (_, effects) = apply(state, 2, 2);
        assert_eq!(effects, vec![Effect::Dispatch(Action::DeclareWinner(Player::O))]);
    }

    #[test]
    fn silent_once_winner_is_recorded() {
        let mut state = reduce(&AppState::new(), &Action::DeclareWinner(Player::X));
        for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            state = reduce(&state, &Action::PlaceMark(cell(x, y)));
        }
        let (_, effects) = apply(state, 2, 0);
        assert!(effects.is_empty());
    }
}

//! The state reducer.
//!
//! `reduce` is a total function: every action yields a state, and the input
//! state is never modified. Actions that are not transitions pass through
//! unchanged.

use crate::action::Action;
use crate::state::AppState;
use tracing::{instrument, trace};

/// Computes the state that follows `action`.
#[instrument(level = "trace", skip_all, fields(action = %action))]
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    match action {
        Action::PlaceMark(cell) => AppState {
            board: state.board.with_mark(*cell, state.player),
            player: state.player.opponent(),
            score: state.score.with_mark(*cell, state.player),
            ..state.clone()
        },
        Action::ReportError(message) => AppState {
            error: Some(message.clone()),
            ..state.clone()
        },
        Action::ClearError => AppState {
            error: None,
            ..state.clone()
        },
        Action::DeclareWinner(player) => AppState {
            winner: Some(*player),
            ..state.clone()
        },
        Action::Reset => AppState::new(),
        Action::PlayerAction(_) => {
            trace!("not a transition, state unchanged");
            state.clone()
        }
    }
}

//! Rules that react to dispatched actions.
//!
//! Each rule sees every action after the reducer has applied it, together
//! with the resulting state, and answers with follow-up [`Effect`]s. Rules
//! never touch state themselves; the store feeds their effects back through
//! the reducer.

mod error_timer;
mod validate;
mod win;

pub use error_timer::ClearErrorAfter;
pub use validate::{SQUARE_TAKEN, ValidateMove};
pub use win::CheckWin;

use crate::action::Action;
use crate::settings::GameSettings;
use crate::state::AppState;
use std::time::Duration;

/// A follow-up produced by a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Dispatch right away, before the next inbound action.
    Dispatch(Action),
    /// Dispatch once the delay has elapsed.
    After(Duration, Action),
}

/// Derives follow-up actions from an applied action.
pub trait Rule: Send {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Reacts to `action`, which has already been applied to produce `state`.
    fn react(&self, action: &Action, state: &AppState) -> Vec<Effect>;
}

/// The game's rule set: validation, win detection and error expiry.
pub fn game_rules(settings: &GameSettings) -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ValidateMove::new(*settings.lock_after_win())),
        Box::new(ClearErrorAfter::new(settings.error_clear_delay())),
        Box::new(CheckWin),
    ]
}

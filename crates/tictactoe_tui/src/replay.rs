//! Headless replay of a scripted game.

use crate::cli::ReplayStep;
use crate::view::View;
use anyhow::Result;
use tictactoe_store::{Action, AppState, DeferredScheduler, GameSettings, Store};
use tracing::{debug, info, instrument};

/// Plays `steps` on a fresh store and returns the final state.
///
/// Timers are recorded rather than run. With `flush_timers` every pending
/// error clear fires once the script is done; otherwise the last error stays
/// visible in the result.
#[instrument(skip(settings, steps), fields(step_count = steps.len()))]
pub fn replay(settings: &GameSettings, steps: &[ReplayStep], flush_timers: bool) -> AppState {
    let scheduler = DeferredScheduler::new();
    let mut store = Store::new(settings, scheduler.clone());

    for step in steps {
        let action = match step {
            ReplayStep::Move(cell) => Action::PlayerAction(*cell),
            ReplayStep::Reset => Action::Reset,
        };
        store.dispatch(action);
    }

    if flush_timers {
        for timer in scheduler.take() {
            debug!(action = %timer.action, "Firing deferred timer");
            store.dispatch(timer.action);
        }
    }

    info!(winner = ?store.state().winner(), "Replay finished");
    store.state().clone()
}

/// Renders a state as plain text: status line, board, error, reset hint.
pub fn render_text(state: &AppState) -> String {
    let view = View::from_state(state);
    let mut out = format!("{}\n\n{}\n", view.header(), state.board());
    if let Some(error) = view.error() {
        out.push('\n');
        out.push_str(error);
        out.push('\n');
    }
    if *view.show_reset() {
        out.push_str("\nreset board\n");
    }
    out
}

/// Renders a state as pretty JSON.
pub fn render_json(state: &AppState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

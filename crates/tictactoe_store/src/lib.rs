//! Tic-tac-toe state store.
//!
//! Game state lives in a single [`Store`]. Player clicks enter as
//! [`Action::PlayerAction`] intents; a small set of rules validates them,
//! places marks, detects the winner and expires error messages, feeding the
//! resulting transitions through a pure [`reduce`] function.
//!
//! # Architecture
//!
//! - **Reducer**: `(state, action) -> state`, total and non-mutating
//! - **Rules**: derive follow-up actions, immediate or delayed
//! - **Store**: owns state, runs rules depth-first, notifies subscribers
//! - **Scheduler**: delivers delayed actions (tokio timers, or deferred)
//! - **Runtime**: async inbox in front of the store, snapshots out
//!
//! # Example
//!
//! ```
//! use tictactoe_store::{Action, Cell, DeferredScheduler, GameSettings, Player, Store};
//!
//! let mut store = Store::new(&GameSettings::default(), DeferredScheduler::new());
//! store.dispatch(Action::PlayerAction(Cell::new(1, 1)?));
//! assert_eq!(*store.state().player(), Player::O);
//! # Ok::<(), tictactoe_store::CellError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod position;
mod reducer;
mod rules;
mod runtime;
mod scheduler;
mod score;
mod settings;
mod state;
mod store;
mod types;

pub use action::Action;
pub use error::{CellError, RuntimeError};
pub use position::{BOARD_SIZE, Cell};
pub use reducer::reduce;
pub use rules::{CheckWin, ClearErrorAfter, Effect, Rule, SQUARE_TAKEN, ValidateMove, game_rules};
pub use runtime::{GameRuntime, StoreHandle};
pub use scheduler::{DeferredScheduler, Scheduled, Scheduler, TokioScheduler};
pub use score::{Line, Score, WIN_THRESHOLD};
pub use settings::{ConfigError, GameSettings};
pub use state::AppState;
pub use store::{Store, SubscriptionId};
pub use types::{Board, Player, Square};

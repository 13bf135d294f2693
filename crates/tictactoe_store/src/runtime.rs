//! Async wiring: an inbox in front of the store, snapshots out of it.

use crate::action::Action;
use crate::error::RuntimeError;
use crate::position::Cell;
use crate::scheduler::TokioScheduler;
use crate::settings::GameSettings;
use crate::state::AppState;
use crate::store::Store;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{info, instrument};

/// Drives a [`Store`] from an unbounded inbox.
///
/// Player intents from the UI and expired timers share the inbox, so every
/// action is processed one at a time by the single task that owns the store.
#[derive(Debug)]
pub struct GameRuntime {
    store: Store<TokioScheduler>,
    inbox: mpsc::UnboundedReceiver<Action>,
}

impl GameRuntime {
    /// Creates a runtime and the handle used to talk to it.
    #[instrument]
    pub fn new(settings: &GameSettings) -> (Self, StoreHandle) {
        let (sender, inbox) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshots) = watch::channel(AppState::new());

        let mut store = Store::new(settings, TokioScheduler::new(&sender));
        store.subscribe(move |state| {
            snapshot_tx.send_replace(state.clone());
        });

        (Self { store, inbox }, StoreHandle { sender, snapshots })
    }

    /// Processes actions until every [`StoreHandle`] is dropped.
    pub async fn run(mut self) {
        info!("Game runtime started");
        while let Some(action) = self.inbox.recv().await {
            self.store.dispatch(action);
        }
        info!("All handles dropped, game runtime stopping");
    }

    /// Spawns [`GameRuntime::run`] onto the current tokio runtime.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }
}

/// Cloneable entry point for the UI: bound action creators plus snapshots.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    sender: mpsc::UnboundedSender<Action>,
    snapshots: watch::Receiver<AppState>,
}

impl StoreHandle {
    /// A player activated `cell`.
    pub fn attempt_move(&self, cell: Cell) -> Result<(), RuntimeError> {
        self.dispatch(Action::PlayerAction(cell))
    }

    /// Start a new game.
    pub fn reset(&self) -> Result<(), RuntimeError> {
        self.dispatch(Action::Reset)
    }

    /// Posts any action to the runtime.
    #[instrument(level = "debug", skip_all, fields(action = %action))]
    pub fn dispatch(&self, action: Action) -> Result<(), RuntimeError> {
        self.sender
            .send(action)
            .map_err(|e| RuntimeError::new(format!("Runtime is not running, dropped {}", e.0)))
    }

    /// Latest state snapshot.
    pub fn state(&self) -> AppState {
        self.snapshots.borrow().clone()
    }

    /// A receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.snapshots.clone()
    }
}

//! Delayed dispatch.

use crate::action::Action;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Delivers an action to the store after a delay.
pub trait Scheduler: Send {
    /// Arranges for `action` to be dispatched once `delay` has elapsed.
    fn schedule(&self, delay: Duration, action: Action);
}

/// Runs each timer as a tokio task that posts back into the runtime inbox.
///
/// Holds only a weak sender, so pending timers do not keep the runtime alive
/// after every [`StoreHandle`](crate::StoreHandle) is dropped. Must be used
/// from within a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    inbox: mpsc::WeakUnboundedSender<Action>,
}

impl TokioScheduler {
    /// Creates a scheduler that posts into `inbox`.
    pub fn new(inbox: &mpsc::UnboundedSender<Action>) -> Self {
        Self {
            inbox: inbox.downgrade(),
        }
    }
}

impl Scheduler for TokioScheduler {
    #[instrument(level = "debug", skip_all, fields(action = %action, delay = ?delay))]
    fn schedule(&self, delay: Duration, action: Action) {
        let inbox = self.inbox.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match inbox.upgrade() {
                Some(sender) => {
                    if sender.send(action).is_err() {
                        debug!("Runtime stopped before timer fired");
                    }
                }
                None => debug!("Runtime gone, dropping timer"),
            }
        });
    }
}

/// A timer recorded by [`DeferredScheduler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled {
    /// Requested delay.
    pub delay: Duration,
    /// Action to dispatch when it elapses.
    pub action: Action,
}

/// Records timers instead of running them.
///
/// Used for headless replays, where the caller decides whether pending
/// timers fire. Clones share the same pending list.
#[derive(Debug, Clone, Default)]
pub struct DeferredScheduler {
    pending: Arc<Mutex<Vec<Scheduled>>>,
}

impl DeferredScheduler {
    /// Creates a scheduler with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Timers scheduled and not yet taken.
    pub fn pending(&self) -> Vec<Scheduled> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns every pending timer, in scheduling order.
    pub fn take(&self) -> Vec<Scheduled> {
        std::mem::take(&mut *self.pending.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Scheduler for DeferredScheduler {
    fn schedule(&self, delay: Duration, action: Action) {
        debug!(action = %action, ?delay, "Deferring timer");
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Scheduled { delay, action });
    }
}

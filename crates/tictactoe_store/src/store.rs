//! The store: single owner of game state.
//!
//! Every action goes through [`Store::dispatch`]. The reducer applies it,
//! subscribers see the new snapshot, and the rules answer with follow-ups.
//! Immediate follow-ups are processed depth-first in the order the rules
//! emitted them: a derived action's own follow-ups run before its later
//! siblings, and all of them finish before `dispatch` returns. Delayed
//! follow-ups go to the [`Scheduler`].

use crate::action::Action;
use crate::reducer::reduce;
use crate::rules::{Effect, Rule, game_rules};
use crate::scheduler::Scheduler;
use crate::settings::GameSettings;
use crate::state::AppState;
use std::collections::VecDeque;
use tracing::{debug, instrument, trace};

/// Identifies a subscription so it can be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("subscription#{}", _0)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&AppState) + Send>;

/// Command processor owning the state, rules, subscribers and timers.
pub struct Store<S> {
    state: AppState,
    rules: Vec<Box<dyn Rule>>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    scheduler: S,
}

impl<S: Scheduler> Store<S> {
    /// Creates a store in the initial state with the game's rules.
    #[instrument(skip(scheduler))]
    pub fn new(settings: &GameSettings, scheduler: S) -> Self {
        Self::with_rules(game_rules(settings), scheduler)
    }

    /// Creates a store in the initial state with a custom rule set.
    pub fn with_rules(rules: Vec<Box<dyn Rule>>, scheduler: S) -> Self {
        Self {
            state: AppState::new(),
            rules,
            subscribers: Vec::new(),
            next_subscription: 0,
            scheduler,
        }
    }

    /// Current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The scheduler receiving delayed follow-ups.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Registers `callback` to receive every changed state.
    ///
    /// Actions that leave the state equal, such as clearing an absent error,
    /// do not notify.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&AppState) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        debug!(%id, "Subscriber added");
        id
    }

    /// Removes a subscription. Returns whether it existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Processes `action` and everything it immediately leads to.
    #[instrument(skip_all, fields(action = %action))]
    pub fn dispatch(&mut self, action: Action) {
        let mut queue = VecDeque::from([action]);

        while let Some(action) = queue.pop_front() {
            debug!(kind = action.kind(), "Applying action");
            self.apply(&action);

            let mut immediate = Vec::new();
            for rule in &self.rules {
                for effect in rule.react(&action, &self.state) {
                    trace!(rule = rule.name(), ?effect, "Rule fired");
                    match effect {
                        Effect::Dispatch(next) => immediate.push(next),
                        Effect::After(delay, next) => self.scheduler.schedule(delay, next),
                    }
                }
            }

            for next in immediate.into_iter().rev() {
                queue.push_front(next);
            }
        }
    }

    fn apply(&mut self, action: &Action) {
        let next = reduce(&self.state, action);
        if next == self.state {
            return;
        }
        self.state = next;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}

impl<S> std::fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

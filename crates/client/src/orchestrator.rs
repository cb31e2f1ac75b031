//! The fetch state machine.
//!
//! A trigger suspends logically from submission to result arrival, but the
//! rendering side never blocks: it observes an explicit finite-state value
//! through a watch channel and re-renders on change.

use std::sync::Arc;

use tokio::sync::watch;

use crate::action::{ActionClient, ActionOutcome};

/// Request state owned exclusively by the controller.
///
/// idle -> submitting on trigger; submitting -> loaded when the result
/// arrives (success or failure alike); loaded -> submitting on re-trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Submitting,
    Loaded,
}

/// What the view layer sees on each render tick.
///
/// `generation` increments once per arrived outcome, so observers can tell a
/// *new* result from a re-render of the old one.
#[derive(Debug, Clone)]
pub struct FetchSnapshot {
    pub state: FetchState,
    pub generation: u64,
    pub outcome: Option<Arc<ActionOutcome>>,
}

/// Orchestrates one logical fetch action.
pub struct FetchController {
    client: ActionClient,
    shared: watch::Sender<FetchSnapshot>,
}

impl FetchController {
    pub fn new(client: ActionClient) -> Arc<Self> {
        let (shared, _) = watch::channel(FetchSnapshot {
            state: FetchState::Idle,
            generation: 0,
            outcome: None,
        });

        Arc::new(Self { client, shared })
    }

    /// Read-only view of the current state, updated on every transition.
    pub fn subscribe(&self) -> watch::Receiver<FetchSnapshot> {
        self.shared.subscribe()
    }

    /// Current state without subscribing.
    pub fn snapshot(&self) -> FetchSnapshot {
        self.shared.borrow().clone()
    }

    /// Submit the action. Returns `false` (and issues no call) while a call
    /// is already in flight; at most one call is outstanding per controller.
    pub fn trigger(self: &Arc<Self>) -> bool {
        // The single-flight check and the flip to submitting happen under the
        // channel's lock, so two racing triggers cannot both pass.
        let started = self.shared.send_if_modified(|snapshot| {
            if snapshot.state == FetchState::Submitting {
                return false;
            }
            snapshot.state = FetchState::Submitting;
            true
        });

        if !started {
            return false;
        }

        let this = Arc::clone(self);
        tokio::spawn(async move {
            let outcome = this.client.fetch_inventory().await;
            this.shared.send_modify(|snapshot| {
                snapshot.generation += 1;
                snapshot.outcome = Some(Arc::new(outcome));
                snapshot.state = FetchState::Loaded;
            });
        });

        true
    }
}

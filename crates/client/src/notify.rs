//! One-shot toast acknowledgement.
//!
//! Fires exactly once per *new successful* outcome: generation change plus a
//! fetched result. Re-renders of the same snapshot stay silent, and failures
//! never toast.

use crate::action::ActionOutcome;
use crate::orchestrator::FetchSnapshot;

pub const INVENTORY_FETCHED: &str = "Inventory fetched";

/// A transient, non-blocking acknowledgement for the view layer to surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ToastEmitter {
    last_generation: u64,
}

impl ToastEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe a snapshot; returns a toast only for a new successful outcome.
    ///
    /// Any new outcome advances the emitter, so a failure arms it for the
    /// next success rather than replaying an old one.
    pub fn observe(&mut self, snapshot: &FetchSnapshot) -> Option<Toast> {
        let outcome = snapshot.outcome.as_deref()?;

        if snapshot.generation == self.last_generation {
            return None;
        }
        self.last_generation = snapshot.generation;

        match outcome {
            ActionOutcome::Fetched(_) => Some(Toast {
                message: INVENTORY_FETCHED.to_string(),
            }),
            ActionOutcome::Failed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::orchestrator::FetchState;
    use stocklink_upstream::{Connection, InventoryData};

    fn fetched() -> ActionOutcome {
        ActionOutcome::Fetched(InventoryData {
            inventory_items: Connection { edges: vec![] },
        })
    }

    fn snapshot(generation: u64, outcome: Option<ActionOutcome>) -> FetchSnapshot {
        FetchSnapshot {
            state: if outcome.is_some() {
                FetchState::Loaded
            } else {
                FetchState::Idle
            },
            generation,
            outcome: outcome.map(Arc::new),
        }
    }

    #[test]
    fn fires_once_for_a_new_successful_outcome() {
        let mut emitter = ToastEmitter::new();

        let snap = snapshot(1, Some(fetched()));
        let toast = emitter.observe(&snap).unwrap();
        assert_eq!(toast.message, INVENTORY_FETCHED);

        // Re-render of the same snapshot: dormant.
        assert!(emitter.observe(&snap).is_none());
    }

    #[test]
    fn does_not_fire_before_any_outcome() {
        let mut emitter = ToastEmitter::new();
        assert!(emitter.observe(&snapshot(0, None)).is_none());
    }

    #[test]
    fn does_not_fire_on_failure_but_arms_for_next_success() {
        let mut emitter = ToastEmitter::new();

        let failed = snapshot(
            1,
            Some(ActionOutcome::Failed {
                error: "upstream_error".to_string(),
            }),
        );
        assert!(emitter.observe(&failed).is_none());

        // The failure advanced the emitter; the next success still fires.
        let success = snapshot(2, Some(fetched()));
        assert!(emitter.observe(&success).is_some());
    }

    #[test]
    fn fires_again_only_on_the_next_generation() {
        let mut emitter = ToastEmitter::new();

        assert!(emitter.observe(&snapshot(1, Some(fetched()))).is_some());
        assert!(emitter.observe(&snapshot(1, Some(fetched()))).is_none());
        assert!(emitter.observe(&snapshot(2, Some(fetched()))).is_some());
    }
}

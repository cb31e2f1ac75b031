//! `stocklink-client`
//!
//! **Responsibility:** the client half of the inventory fetch flow.
//!
//! This crate provides:
//! - The action call against the gateway (always yields a well-formed outcome)
//! - The fetch state machine (idle → submitting → loaded, single-flight)
//! - One-shot toast acknowledgement of new successful results
//! - The presentational row projection consumed by the view layer
//!
//! The client is a **thin shell** around the gateway's action endpoint.

pub mod action;
pub mod notify;
pub mod orchestrator;
pub mod render;

pub use action::{ActionClient, ActionOutcome};
pub use notify::{Toast, ToastEmitter};
pub use orchestrator::{FetchController, FetchSnapshot, FetchState};
pub use render::{InventoryView, ItemRow, inventory_view};

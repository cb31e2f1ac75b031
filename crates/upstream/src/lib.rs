//! `stocklink-upstream` — the read query against the tenant's admin API.
//!
//! One fixed, parameterless query; one network call per trigger; no retries,
//! no caching. The decoded `data` is handed back without reshaping.

pub mod client;
pub mod envelope;
pub mod query;

pub use client::{UpstreamClient, UpstreamError};
pub use envelope::{Connection, Edge, InventoryData, ItemNode, LevelNode, Quantity, QueryEnvelope};
pub use query::{AVAILABLE_QUANTITY, INVENTORY_QUERY, ITEMS_PAGE_SIZE, LEVELS_PAGE_SIZE};

use axum::{Router, routing::get};

pub mod inventory;
pub mod system;

/// Router for all authenticated (tenant-scoped) endpoints.
pub fn router() -> Router {
    Router::new().route(
        "/app/inventory",
        get(inventory::loader).post(inventory::action),
    )
}

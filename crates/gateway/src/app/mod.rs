//! HTTP gateway application wiring (axum router + middleware stack).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: consistent error responses
//! - `crate::middleware`: authentication gate
//! - `crate::boundary`: platform compliance headers

use std::sync::Arc;

use axum::{Router, routing::get};
use tower::ServiceBuilder;

use stocklink_auth::{SessionStore, TokenDecoder};

use crate::{boundary, middleware};

pub mod errors;
pub mod routes;

/// Gateway configuration, resolved from the environment by `main.rs` and
/// supplied directly by tests.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Secret the inbound session tokens are signed with.
    pub session_secret: String,
    /// Origin allowed to embed this app; drives the boundary headers.
    pub embedder_origin: String,
}

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(config: GatewayConfig, store: Arc<dyn SessionStore>) -> Router {
    let decoder = Arc::new(TokenDecoder::hs256(config.session_secret.as_bytes()));
    let auth_state = middleware::AuthState { decoder, store };
    let boundary_state = boundary::BoundaryHeaders::new(&config.embedder_origin);

    // Protected routes: loader and action both authenticate independently.
    let protected = routes::router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
        // Outermost: compliance headers on every response, error paths included.
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn_with_state(
            boundary_state,
            boundary::boundary_headers,
        )))
}

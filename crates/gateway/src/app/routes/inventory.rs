use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use stocklink_upstream::UpstreamClient;

use crate::app::errors;
use crate::context::SessionContext;

/// Page-load path: authentication only, the render is client-owned.
pub async fn loader(Extension(_session): Extension<SessionContext>) -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Action path: one upstream query per trigger.
///
/// The response is always a well-formed action result: the inventory envelope
/// on success, the documented failure envelope otherwise. Upstream faults
/// never propagate past this handler.
pub async fn action(Extension(session): Extension<SessionContext>) -> axum::response::Response {
    let session = session.session();
    let client = UpstreamClient::for_session(session);

    match client.fetch_inventory().await {
        Ok(data) => (StatusCode::OK, Json(json!({ "inventory": data }))).into_response(),
        Err(err) => {
            tracing::warn!(
                kind = err.kind(),
                tenant = %session.tenant_id(),
                error = %err,
                "inventory fetch failed",
            );
            errors::json_error(StatusCode::BAD_GATEWAY, "upstream_error", err.to_string())
        }
    }
}

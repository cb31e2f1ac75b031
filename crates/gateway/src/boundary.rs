//! Embedding-platform boundary headers.
//!
//! The hosting platform requires its compliance headers on every response,
//! success and error paths alike. This is a pass-through obligation, applied
//! as the outermost layer so auth rejections carry the headers too.

use axum::{
    extract::State,
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

#[derive(Clone)]
pub struct BoundaryHeaders {
    frame_ancestors: HeaderValue,
}

impl BoundaryHeaders {
    /// Build the policy for the origin that embeds this app.
    ///
    /// An origin that cannot be expressed as a header value degrades to
    /// `'none'` (deny all embedding) with a warning.
    pub fn new(embedder_origin: &str) -> Self {
        let value = format!("frame-ancestors {}", embedder_origin);
        let frame_ancestors = HeaderValue::from_str(&value).unwrap_or_else(|_| {
            tracing::warn!(origin = embedder_origin, "invalid embedder origin");
            HeaderValue::from_static("frame-ancestors 'none'")
        });

        Self { frame_ancestors }
    }
}

pub async fn boundary_headers(
    State(boundary): State<BoundaryHeaders>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let mut response = next.run(req).await;
    response.headers_mut().insert(
        header::CONTENT_SECURITY_POLICY,
        boundary.frame_ancestors.clone(),
    );
    response
}

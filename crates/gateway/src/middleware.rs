use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use stocklink_auth::{SessionStore, TokenDecoder, authenticate};

use crate::app::errors;
use crate::context::SessionContext;

#[derive(Clone)]
pub struct AuthState {
    pub decoder: Arc<TokenDecoder>,
    pub store: Arc<dyn SessionStore>,
}

/// Authentication gate for protected routes.
///
/// Loader and action paths both pass through here; every request is
/// authenticated independently. No request reaches a handler (and therefore
/// the upstream API) without a validated session in its extensions.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let token = match extract_bearer(req.headers()) {
        Ok(token) => token,
        Err(()) => return challenge("missing or malformed credential"),
    };

    let session = match authenticate(token, &state.decoder, state.store.as_ref(), Utc::now()) {
        Ok(session) => session,
        Err(e) => {
            tracing::debug!(error = %e, "authentication rejected");
            return challenge("session is invalid or expired; re-authenticate");
        }
    };

    req.extensions_mut().insert(SessionContext::new(session));

    next.run(req).await
}

/// Re-authentication challenge: the platform-appropriate way to bounce the
/// embedded surface back through the auth flow.
fn challenge(message: &str) -> Response {
    let mut response = errors::json_error(StatusCode::UNAUTHORIZED, "unauthorized", message);
    response.headers_mut().insert(
        header::WWW_AUTHENTICATE,
        axum::http::HeaderValue::from_static("Bearer"),
    );
    response
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, ()> {
    let header = headers.get(header::AUTHORIZATION).ok_or(())?;

    let header = header.to_str().map_err(|_| ())?;

    let header = header.strip_prefix("Bearer ").ok_or(())?;

    let token = header.trim();
    if token.is_empty() {
        return Err(());
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        let headers = headers_with_auth("Bearer abc.def.ghi");
        assert_eq!(extract_bearer(&headers), Ok("abc.def.ghi"));
    }

    #[test]
    fn rejects_missing_header() {
        assert!(extract_bearer(&HeaderMap::new()).is_err());
    }

    #[test]
    fn rejects_non_bearer_scheme() {
        let headers = headers_with_auth("Basic dXNlcjpwYXNz");
        assert!(extract_bearer(&headers).is_err());
    }

    #[test]
    fn rejects_empty_token() {
        let headers = headers_with_auth("Bearer ");
        assert!(extract_bearer(&headers).is_err());
    }
}

//! Validated per-request sessions.

use chrono::{DateTime, Utc};
use thiserror::Error;

use stocklink_core::TenantId;

use crate::claims::{TokenValidationError, validate_claims};
use crate::store::SessionStore;
use crate::token::{TokenDecodeError, TokenDecoder};

/// Proof of an authenticated tenant for the current request.
///
/// A `Session` exists only after the full gate has passed: token decoded,
/// validity window checked, tenant confirmed installed. It carries everything
/// the upstream executor needs and lives for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    tenant_id: TenantId,
    api_base: String,
    access_token: String,
}

impl Session {
    pub fn new(tenant_id: TenantId, api_base: String, access_token: String) -> Self {
        Self {
            tenant_id,
            api_base,
            access_token,
        }
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    /// Base URL of the tenant's upstream admin API.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Upstream credential granted to this app at install time.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing or malformed credential")]
    MissingCredential,

    #[error(transparent)]
    InvalidToken(#[from] TokenDecodeError),

    #[error(transparent)]
    InvalidClaims(#[from] TokenValidationError),

    #[error("tenant {0} is not installed")]
    NotInstalled(TenantId),
}

/// Run the full authentication gate against a raw bearer token.
///
/// Identical for the loader and action paths; neither trusts the other. The
/// returned [`Session`] is the only way a request can reach the upstream API.
pub fn authenticate(
    token: &str,
    decoder: &TokenDecoder,
    store: &dyn SessionStore,
    now: DateTime<Utc>,
) -> Result<Session, AuthError> {
    let claims = decoder.decode(token)?;
    validate_claims(&claims, now)?;

    let tenant = store
        .find(&claims.tenant_id)
        .ok_or(AuthError::NotInstalled(claims.tenant_id))?;

    Ok(Session::new(
        tenant.tenant_id,
        tenant.api_base,
        tenant.access_token,
    ))
}

//! Per-request client for the tenant's admin API.

use serde_json::json;
use thiserror::Error;

use stocklink_auth::Session;

use crate::envelope::{InventoryData, QueryEnvelope};
use crate::query::INVENTORY_QUERY;

/// Upstream failure taxonomy.
///
/// All three kinds look the same to the client of the gateway; they are kept
/// apart so the gateway can log them distinctly.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Network/HTTP-level failure (connection error or non-success status).
    #[error("upstream transport failure: {0}")]
    Transport(String),

    /// Transport succeeded but the envelope reported errors or carried no data.
    #[error("upstream data failure: {0}")]
    Data(String),

    /// Body was not a decodable envelope.
    #[error("malformed upstream response: {0}")]
    Malformed(String),
}

impl UpstreamError {
    /// Stable kind label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Transport(_) => "transport",
            UpstreamError::Data(_) => "data",
            UpstreamError::Malformed(_) => "malformed",
        }
    }
}

/// Tenant-scoped API client, built from a validated [`Session`] and living
/// for one request.
pub struct UpstreamClient {
    http: reqwest::Client,
    api_base: String,
    access_token: String,
}

impl UpstreamClient {
    pub fn for_session(session: &Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: session.api_base().to_string(),
            access_token: session.access_token().to_string(),
        }
    }

    /// Execute the fixed inventory query. Exactly one network call; a failed
    /// call produces a failed result immediately.
    pub async fn fetch_inventory(&self) -> Result<InventoryData, UpstreamError> {
        let url = format!("{}/graphql", self.api_base);

        let response = self
            .http
            .post(&url)
            .header("x-access-token", &self.access_token)
            .json(&json!({ "query": INVENTORY_QUERY }))
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Transport(format!(
                "upstream returned {}",
                status
            )));
        }

        let envelope: QueryEnvelope = response
            .json()
            .await
            .map_err(|e| UpstreamError::Malformed(e.to_string()))?;

        if let Some(errors) = envelope.errors.filter(|errs| !errs.is_empty()) {
            let joined = errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(UpstreamError::Data(joined));
        }

        envelope
            .data
            .ok_or_else(|| UpstreamError::Data("envelope contained no data".to_string()))
    }
}

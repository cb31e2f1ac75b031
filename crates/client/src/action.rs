//! The action call against the gateway.

use serde::Deserialize;

use stocklink_upstream::InventoryData;

/// Result of one triggered round trip.
///
/// Always well-formed: transport faults, gateway failure envelopes, and
/// undecodable bodies all collapse into [`ActionOutcome::Failed`]. Nothing
/// throws past the orchestrator boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Fetched(InventoryData),
    Failed { error: String },
}

impl ActionOutcome {
    pub fn is_fetched(&self) -> bool {
        matches!(self, ActionOutcome::Fetched(_))
    }

    pub fn inventory(&self) -> Option<&InventoryData> {
        match self {
            ActionOutcome::Fetched(data) => Some(data),
            ActionOutcome::Failed { .. } => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ActionResponse {
    inventory: InventoryData,
}

#[derive(Debug, Deserialize)]
struct FailureEnvelope {
    error: String,
    #[serde(default)]
    message: String,
}

/// HTTP client for the gateway's action endpoint.
///
/// Holds the session token for the embedded surface; the platform refreshes
/// the token outside this crate.
pub struct ActionClient {
    http: reqwest::Client,
    gateway_url: String,
    session_token: String,
}

impl ActionClient {
    pub fn new(gateway_url: impl Into<String>, session_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            gateway_url: gateway_url.into(),
            session_token: session_token.into(),
        }
    }

    /// Trigger the inventory fetch. One gateway call; no retries.
    pub async fn fetch_inventory(&self) -> ActionOutcome {
        let url = format!("{}/app/inventory", self.gateway_url);

        let response = match self
            .http
            .post(&url)
            .bearer_auth(&self.session_token)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "action request failed");
                return ActionOutcome::Failed {
                    error: format!("request failed: {}", e),
                };
            }
        };

        let status = response.status();
        if !status.is_success() {
            let error = match response.json::<FailureEnvelope>().await {
                Ok(envelope) if !envelope.message.is_empty() => {
                    format!("{}: {}", envelope.error, envelope.message)
                }
                Ok(envelope) => envelope.error,
                Err(_) => format!("gateway returned {}", status),
            };
            tracing::warn!(%status, error = %error, "action returned failure envelope");
            return ActionOutcome::Failed { error };
        }

        match response.json::<ActionResponse>().await {
            Ok(body) => ActionOutcome::Fetched(body.inventory),
            Err(e) => {
                tracing::warn!(error = %e, "action result was not decodable");
                ActionOutcome::Failed {
                    error: format!("undecodable action result: {}", e),
                }
            }
        }
    }
}

use std::sync::Arc;

use stocklink_auth::{InMemorySessionStore, InstalledTenant};
use stocklink_gateway::app::{GatewayConfig, build_app};

#[tokio::main]
async fn main() {
    stocklink_observability::init();

    let session_secret = std::env::var("SESSION_SECRET").unwrap_or_else(|_| {
        tracing::warn!("SESSION_SECRET not set; using insecure dev default");
        "dev-secret".to_string()
    });

    let embedder_origin =
        std::env::var("EMBEDDER_ORIGIN").unwrap_or_else(|_| "'none'".to_string());

    let store = Arc::new(InMemorySessionStore::new());
    install_dev_tenant(&store);

    let config = GatewayConfig {
        session_secret,
        embedder_origin,
    };
    let app = build_app(config, store);

    let bind = std::env::var("STOCKLINK_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind, e));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}

/// Local development shortcut: seed one installed tenant from the
/// environment. Production installs arrive through the platform's session
/// layer, not through this process.
fn install_dev_tenant(store: &InMemorySessionStore) {
    let (Ok(tenant_id), Ok(api_base), Ok(access_token)) = (
        std::env::var("DEV_TENANT_ID"),
        std::env::var("DEV_UPSTREAM_API_BASE"),
        std::env::var("DEV_UPSTREAM_TOKEN"),
    ) else {
        return;
    };

    let tenant_id = match tenant_id.parse() {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(error = %e, "DEV_TENANT_ID is not a valid tenant id; skipping");
            return;
        }
    };

    tracing::info!(tenant = %tenant_id, "installed dev tenant");
    store.install(InstalledTenant {
        tenant_id,
        api_base,
        access_token,
    });
}

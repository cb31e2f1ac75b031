//! Session-store collaborator boundary.
//!
//! Durable storage of installs (OAuth flow, token rotation) is owned by the
//! hosting platform's session layer; this core only consumes a lookup.

use std::collections::HashMap;
use std::sync::RwLock;

use stocklink_core::TenantId;

/// Record of a tenant that currently has the app installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledTenant {
    pub tenant_id: TenantId,
    /// Base URL of the tenant's upstream admin API.
    pub api_base: String,
    /// Upstream credential granted at install time.
    pub access_token: String,
}

/// Lookup boundary for installed tenants.
pub trait SessionStore: Send + Sync {
    fn find(&self, tenant_id: &TenantId) -> Option<InstalledTenant>;
}

/// In-memory store backing tests and local development.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    tenants: RwLock<HashMap<TenantId, InstalledTenant>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&self, tenant: InstalledTenant) {
        self.tenants
            .write()
            .expect("session store lock poisoned")
            .insert(tenant.tenant_id, tenant);
    }

    pub fn uninstall(&self, tenant_id: &TenantId) {
        self.tenants
            .write()
            .expect("session store lock poisoned")
            .remove(tenant_id);
    }
}

impl SessionStore for InMemorySessionStore {
    fn find(&self, tenant_id: &TenantId) -> Option<InstalledTenant> {
        self.tenants
            .read()
            .expect("session store lock poisoned")
            .get(tenant_id)
            .cloned()
    }
}

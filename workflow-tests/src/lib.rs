//! Cross-crate workflow tests library.
//!
//! Provides test infrastructure for driving full client flows (auth,
//! tenant screens, owner screens) against a mocked backend. Each test
//! gets its own mock server and session store, so tests are isolated
//! and runnable in parallel.

use client_core::auth::AuthClient;
use client_core::http::ApiClient;
use client_core::session::{keys, MemorySessionStore, SessionStore, UserRole};
use owner_client::OwnerClient;
use std::sync::{Arc, Once};
use tenant_client::TenantClient;
use wiremock::MockServer;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,workflow_tests=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Context for workflow tests: a mock backend plus every client built
/// over one shared API client and session store.
pub struct WorkflowTestContext {
    pub server: MockServer,
    pub store: Arc<MemorySessionStore>,
    pub api: Arc<ApiClient>,
    pub auth: AuthClient,
    pub tenant: TenantClient,
    pub owner: OwnerClient,
}

impl WorkflowTestContext {
    /// Spawn a fresh mock backend and wire the clients to it.
    pub async fn spawn() -> Self {
        init_tracing();

        let server = MockServer::start().await;
        let store = Arc::new(MemorySessionStore::new());
        let session: Arc<dyn SessionStore> = store.clone();
        let api = Arc::new(ApiClient::new(server.uri(), session));

        Self {
            server,
            store: store.clone(),
            api: api.clone(),
            auth: AuthClient::new(api.clone()),
            tenant: TenantClient::new(api.clone()),
            owner: OwnerClient::new(api),
        }
    }

    /// Seed the session as an already-authenticated user.
    pub fn login_as(&self, token: &str, role: UserRole) {
        self.store.put(keys::TOKEN, token).unwrap();
        self.store.put(keys::ROLE, role.as_str()).unwrap();
        self.store.put(keys::USER_ID, "u-test").unwrap();
    }

    pub fn session_value(&self, key: &str) -> Option<String> {
        self.store.get(key).unwrap()
    }
}

use crate::models::{PropertyTenant, TenantMatch};
use client_core::error::ClientError;
use client_core::http::ApiClient;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct TenantDirectoryService {
    api: Arc<ApiClient>,
}

impl TenantDirectoryService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Tenants across the owner's properties.
    pub async fn tenants(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<PropertyTenant>, ClientError> {
        self.api.get("/owner/tenants", cancel).await.map_err(|err| {
            tracing::error!(error = %err, "failed to load tenants");
            err
        })
    }

    /// Verification search: look a prospective tenant up by name or
    /// phone number before signing a lease.
    pub async fn search_tenant(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<TenantMatch>, ClientError> {
        let path = format!("/owner/search-tenant?query={}", urlencoding::encode(query));
        self.api.get(&path, cancel).await.map_err(|err| {
            tracing::error!(error = %err, query, "tenant search failed");
            err
        })
    }
}

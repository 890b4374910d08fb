use crate::models::Property;
use client_core::error::ClientError;
use client_core::http::ApiClient;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct PropertyService {
    api: Arc<ApiClient>,
}

impl PropertyService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Properties open for browsing tenants.
    pub async fn available_properties(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<Property>, ClientError> {
        self.api
            .get("/tenant/properties", cancel)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to load properties");
                err
            })
    }
}

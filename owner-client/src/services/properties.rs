use crate::models::{NewPropertyRequest, OwnerProperty, UpdatePropertyRequest};
use client_core::error::ClientError;
use client_core::http::ApiClient;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use validator::Validate;

#[derive(Clone)]
pub struct PropertyService {
    api: Arc<ApiClient>,
}

impl PropertyService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn properties(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<OwnerProperty>, ClientError> {
        self.api
            .get("/owner/properties", cancel)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to load properties");
                err
            })
    }

    pub async fn add_property(
        &self,
        request: NewPropertyRequest,
        cancel: &CancellationToken,
    ) -> Result<OwnerProperty, ClientError> {
        request.validate()?;

        let property: OwnerProperty = self
            .api
            .post("/owner/properties", serde_json::to_value(&request)?, cancel)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to add property");
                err
            })?;

        tracing::info!(property_id = %property.id, "property added");
        Ok(property)
    }

    pub async fn update_property(
        &self,
        property_id: &str,
        request: UpdatePropertyRequest,
        cancel: &CancellationToken,
    ) -> Result<OwnerProperty, ClientError> {
        request.validate()?;

        let path = format!("/owner/properties/{property_id}");
        self.api
            .put(&path, serde_json::to_value(&request)?, cancel)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, property_id, "failed to update property");
                err
            })
    }
}

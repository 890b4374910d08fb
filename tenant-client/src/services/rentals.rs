use crate::models::Rental;
use client_core::error::ClientError;
use client_core::http::ApiClient;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct RentalService {
    api: Arc<ApiClient>,
}

impl RentalService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn my_rentals(&self, cancel: &CancellationToken) -> Result<Vec<Rental>, ClientError> {
        self.api
            .get("/tenant/my-rentals", cancel)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to load rentals");
                err
            })
    }

    /// The rental the tenant screens treat as "current": the first
    /// active one in the list.
    pub async fn current_rental(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Option<Rental>, ClientError> {
        let rentals = self.my_rentals(cancel).await?;
        Ok(rentals.into_iter().find(|rental| rental.active))
    }
}

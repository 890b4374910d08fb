use crate::models::{Payment, SimulatePaymentRequest};
use client_core::error::ClientError;
use client_core::http::ApiClient;
use serde_json::json;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone)]
pub struct PaymentService {
    api: Arc<ApiClient>,
}

impl PaymentService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn payment_history(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<Payment>, ClientError> {
        self.api
            .get("/tenant/payments", cancel)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to load payment history");
                err
            })
    }

    /// Run a payment through the backend's simulation endpoint.
    ///
    /// Each attempt carries a fresh client-generated reference so the
    /// backend can tell submissions apart.
    pub async fn simulate_payment(
        &self,
        request: SimulatePaymentRequest,
        cancel: &CancellationToken,
    ) -> Result<Payment, ClientError> {
        request.validate()?;

        let mut body = serde_json::to_value(&request)?;
        body["reference"] = json!(Uuid::new_v4().to_string());

        let payment: Payment = self
            .api
            .post("/payments/simulate", body, cancel)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, rental_id = %request.rental_id, "payment simulation failed");
                err
            })?;

        tracing::info!(
            payment_id = %payment.payment_id,
            amount = payment.amount,
            "payment simulated"
        );
        Ok(payment)
    }
}

use crate::models::OwnerPayment;
use chrono::{Datelike, NaiveDate};
use client_core::error::ClientError;
use client_core::http::ApiClient;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct PaymentService {
    api: Arc<ApiClient>,
}

impl PaymentService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Payments received across the owner's properties.
    pub async fn payments(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<OwnerPayment>, ClientError> {
        self.api
            .get("/owner/payments", cancel)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to load payments");
                err
            })
    }

    /// Rent collected in the current calendar month.
    pub async fn collected_this_month(
        &self,
        today: NaiveDate,
        cancel: &CancellationToken,
    ) -> Result<f64, ClientError> {
        let payments = self.payments(cancel).await?;
        Ok(collected_in_month(&payments, today))
    }
}

/// Sum of COMPLETED payments whose paid date falls in the same calendar
/// month and year as `today`.
pub fn collected_in_month(payments: &[OwnerPayment], today: NaiveDate) -> f64 {
    payments
        .iter()
        .filter(|payment| payment.status.is_completed())
        .filter_map(|payment| payment.paid_date.map(|d| (payment, d.date_naive())))
        .filter(|(_, paid)| paid.month() == today.month() && paid.year() == today.year())
        .map(|(payment, _)| payment.amount)
        .sum()
}

//! Owner home-screen aggregation.

use crate::models::{OwnerPayment, PropertyStatus};
use crate::services::payments::{collected_in_month, PaymentService};
use crate::services::properties::PropertyService;
use crate::services::tenants::TenantDirectoryService;
use chrono::NaiveDate;
use client_core::error::ClientError;
use client_core::http::ApiClient;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

const RECENT_PAYMENTS_SHOWN: usize = 5;

/// Everything the owner home screen renders in one load.
#[derive(Debug, Clone)]
pub struct OwnerDashboard {
    pub total_properties: usize,
    pub available_properties: usize,
    pub occupied_properties: usize,
    pub tenant_count: usize,
    /// COMPLETED payments of the current calendar month, summed.
    pub collected_this_month: f64,
    /// Latest payments, newest-arrival first.
    pub recent_payments: Vec<OwnerPayment>,
}

#[derive(Clone)]
pub struct DashboardService {
    properties: PropertyService,
    tenants: TenantDirectoryService,
    payments: PaymentService,
}

impl DashboardService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            properties: PropertyService::new(api.clone()),
            tenants: TenantDirectoryService::new(api.clone()),
            payments: PaymentService::new(api),
        }
    }

    /// Load the dashboard as of `today` (the device-local calendar
    /// date). Properties, tenants, and payments are fetched
    /// concurrently and joined once all three resolved.
    pub async fn load(
        &self,
        today: NaiveDate,
        cancel: &CancellationToken,
    ) -> Result<OwnerDashboard, ClientError> {
        let (properties, tenants, payments) = tokio::join!(
            self.properties.properties(cancel),
            self.tenants.tenants(cancel),
            self.payments.payments(cancel),
        );
        let properties = properties?;
        let tenants = tenants?;
        let payments = payments?;

        let available_properties = properties
            .iter()
            .filter(|p| p.status == PropertyStatus::Available)
            .count();
        let occupied_properties = properties
            .iter()
            .filter(|p| p.status == PropertyStatus::Occupied)
            .count();

        let collected_this_month = collected_in_month(&payments, today);
        let recent_payments: Vec<OwnerPayment> = payments
            .iter()
            .rev()
            .take(RECENT_PAYMENTS_SHOWN)
            .cloned()
            .collect();

        Ok(OwnerDashboard {
            total_properties: properties.len(),
            available_properties,
            occupied_properties,
            tenant_count: tenants.len(),
            collected_this_month,
            recent_payments,
        })
    }

    /// [`Self::load`] against the device clock.
    pub async fn load_now(
        &self,
        cancel: &CancellationToken,
    ) -> Result<OwnerDashboard, ClientError> {
        self.load(chrono::Local::now().date_naive(), cancel).await
    }
}

//! Tenant home-screen aggregation.

use crate::models::{Payment, Rental};
use crate::rent::status::RentSummary;
use crate::services::notifications::NotificationService;
use crate::services::payments::PaymentService;
use crate::services::rentals::RentalService;
use chrono::NaiveDate;
use client_core::error::ClientError;
use client_core::http::ApiClient;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

const RECENT_PAYMENTS_SHOWN: usize = 5;

/// Everything the tenant home screen renders in one load.
#[derive(Debug, Clone)]
pub struct TenantDashboard {
    pub rental: Option<Rental>,
    pub summary: RentSummary,
    /// Latest payments, newest-arrival first.
    pub recent_payments: Vec<Payment>,
    pub unread_notifications: usize,
}

#[derive(Clone)]
pub struct DashboardService {
    rentals: RentalService,
    payments: PaymentService,
    notifications: NotificationService,
}

impl DashboardService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            rentals: RentalService::new(api.clone()),
            payments: PaymentService::new(api.clone()),
            notifications: NotificationService::new(api),
        }
    }

    /// Load the dashboard as of `today` (the device-local calendar date).
    ///
    /// Rentals, payments, and notifications are fetched concurrently;
    /// the fetches are independent of each other and are only joined
    /// once all three resolved. The first failure among them is the
    /// load's failure.
    pub async fn load(
        &self,
        today: NaiveDate,
        cancel: &CancellationToken,
    ) -> Result<TenantDashboard, ClientError> {
        let (rentals, payments, notifications) = tokio::join!(
            self.rentals.my_rentals(cancel),
            self.payments.payment_history(cancel),
            self.notifications.notifications(cancel),
        );
        let rentals = rentals?;
        let payments = payments?;
        let notifications = notifications?;

        let rental = rentals.into_iter().find(|rental| rental.active);
        let summary = RentSummary::reconcile(rental.as_ref(), &payments, today);

        let recent_payments: Vec<Payment> = payments
            .iter()
            .rev()
            .take(RECENT_PAYMENTS_SHOWN)
            .cloned()
            .collect();
        let unread_notifications = notifications.iter().filter(|n| !n.is_read).count();

        Ok(TenantDashboard {
            rental,
            summary,
            recent_payments,
            unread_notifications,
        })
    }

    /// [`Self::load`] against the device clock.
    pub async fn load_now(
        &self,
        cancel: &CancellationToken,
    ) -> Result<TenantDashboard, ClientError> {
        self.load(chrono::Local::now().date_naive(), cancel).await
    }
}

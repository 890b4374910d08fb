//! tenant-client: tenant-facing services of the Rentify client.
pub mod models;
pub mod rent;
pub mod services;

use client_core::http::ApiClient;
use client_core::session::UserSession;
use std::sync::Arc;

use services::{
    dashboard::DashboardService, notifications::NotificationService, payments::PaymentService,
    profile::ProfileService, properties::PropertyService, rentals::RentalService,
};

/// Bundle of every tenant-facing service over one shared [`ApiClient`].
#[derive(Clone)]
pub struct TenantClient {
    pub rentals: RentalService,
    pub payments: PaymentService,
    pub notifications: NotificationService,
    pub profile: ProfileService,
    pub properties: PropertyService,
    pub dashboard: DashboardService,
}

impl TenantClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        let session = UserSession::new(api.session());
        Self {
            rentals: RentalService::new(api.clone()),
            payments: PaymentService::new(api.clone()),
            notifications: NotificationService::new(api.clone()),
            profile: ProfileService::new(api.clone(), session),
            properties: PropertyService::new(api.clone()),
            dashboard: DashboardService::new(api),
        }
    }
}

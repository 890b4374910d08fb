//! owner-client: landlord-facing services of the Rentify client.
pub mod models;
pub mod services;

use client_core::http::ApiClient;
use std::sync::Arc;

use services::{
    dashboard::DashboardService, notifications::NotificationService, payments::PaymentService,
    properties::PropertyService, tenants::TenantDirectoryService,
};

/// Bundle of every owner-facing service over one shared [`ApiClient`].
#[derive(Clone)]
pub struct OwnerClient {
    pub properties: PropertyService,
    pub tenants: TenantDirectoryService,
    pub payments: PaymentService,
    pub notifications: NotificationService,
    pub dashboard: DashboardService,
}

impl OwnerClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            properties: PropertyService::new(api.clone()),
            tenants: TenantDirectoryService::new(api.clone()),
            payments: PaymentService::new(api.clone()),
            notifications: NotificationService::new(api.clone()),
            dashboard: DashboardService::new(api),
        }
    }
}

//! Owner-facing services over the shared [`ApiClient`](client_core::http::ApiClient).
//!
//! Same contract as the tenant side: no retries, failures logged and
//! bubbled, a cancellation token per call.
pub mod dashboard;
pub mod notifications;
pub mod payments;
pub mod properties;
pub mod tenants;

//! Tenant-facing services over the shared [`ApiClient`](client_core::http::ApiClient).
//!
//! Services do not retry or recover: failures are logged and bubbled to
//! the caller, which owns the user-facing handling. Every call takes a
//! cancellation token tied to the consuming view's lifetime.
pub mod dashboard;
pub mod notifications;
pub mod payments;
pub mod profile;
pub mod properties;
pub mod rentals;

//! client-core: Shared infrastructure for the Rentify client crates.
pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod media;
pub mod observability;
pub mod session;

pub use reqwest;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tokio_util;
pub use tracing;
pub use validator;

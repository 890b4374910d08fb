//! Client-side rent arithmetic.
//!
//! The backend exposes raw rentals and payments but no precomputed
//! status; everything a tenant screen shows about "where do I stand this
//! month" is derived here, in memory, from small lists.
pub mod history;
pub mod status;

pub use history::{group_by_month, MonthBucket};
pub use status::{RentStatus, RentSummary};

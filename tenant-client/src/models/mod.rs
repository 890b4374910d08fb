//! Backend records as the tenant endpoints return them.
//!
//! These are plain wire DTOs: the backend owns the data, the client keeps
//! nothing beyond the session. Field names are `camelCase` on the wire,
//! status values `SCREAMING_SNAKE_CASE` with an open tail for values the
//! backend adds later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A lease binding the tenant to a property.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub rental_id: String,
    pub property_id: String,
    pub rent_amount: f64,
    /// Day of month the rent falls due.
    pub due_day: u32,
    pub active: bool,
    #[serde(default)]
    pub owner_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
    #[serde(untagged)]
    Other(String),
}

impl PaymentStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub payment_id: String,
    pub rental_id: String,
    pub amount: f64,
    #[serde(default)]
    pub payment_method: String,
    pub status: PaymentStatus,
    /// Absent until the payment has gone through a provider.
    #[serde(default)]
    pub paid_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyStatus {
    Available,
    Occupied,
    Unavailable,
    #[serde(untagged)]
    Other(String),
}

/// A property as listed for browsing tenants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Some endpoints send `id`, others `propertyId`.
    #[serde(alias = "propertyId")]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub rent_amount: f64,
    pub due_day: u32,
    pub status: PropertyStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub full_name: String,
    pub telephone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, message = "full name is too short"))]
    pub full_name: String,
    #[validate(length(min = 10, max = 15, message = "telephone must be 10-15 digits"))]
    pub telephone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "profile image must be a URL"))]
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SimulatePaymentRequest {
    pub rental_id: String,
    #[validate(range(min = 1.0, message = "amount must be positive"))]
    pub amount: f64,
    #[validate(length(min = 1, message = "payment method is required"))]
    pub payment_method: String,
}

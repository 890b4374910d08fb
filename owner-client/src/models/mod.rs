//! Backend records as the owner endpoints return them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyStatus {
    Available,
    Occupied,
    Unavailable,
    #[serde(untagged)]
    Other(String),
}

/// A property in the owner's portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerProperty {
    #[serde(alias = "propertyId")]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub rent_amount: f64,
    pub due_day: u32,
    pub status: PropertyStatus,
    /// Set while a rental is active on the property.
    #[serde(default)]
    pub tenant_name: Option<String>,
}

/// A tenant as the owner's directory lists them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyTenant {
    pub user_id: String,
    pub full_name: String,
    pub telephone: String,
    #[serde(default)]
    pub property_id: Option<String>,
    #[serde(default)]
    pub rental_id: Option<String>,
    #[serde(default)]
    pub rent_amount: Option<f64>,
    #[serde(default)]
    pub active: bool,
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

/// A rent payment as the owner sees it: annotated with the payer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerPayment {
    pub payment_id: String,
    pub rental_id: String,
    #[serde(default)]
    pub tenant_name: String,
    pub amount: f64,
    #[serde(default)]
    pub payment_method: String,
    pub status: PaymentStatus,
    #[serde(default)]
    pub paid_date: Option<DateTime<Utc>>,
}

/// Result row of the tenant-verification search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantMatch {
    pub user_id: String,
    pub full_name: String,
    pub telephone: String,
    #[serde(default)]
    pub has_active_rental: bool,
    #[serde(default)]
    pub current_property: Option<String>,
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

#[derive(Debug, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPropertyRequest {
    #[validate(length(min = 5, message = "description is too short"))]
    pub description: String,
    #[validate(length(min = 2, message = "location is too short"))]
    pub location: String,
    #[validate(range(min = 1.0, message = "rent amount must be positive"))]
    pub rent_amount: f64,
    #[validate(range(min = 1, max = 31, message = "due day must be a day of month"))]
    pub due_day: u32,
}

/// Partial update; absent fields are left untouched by the backend.
#[derive(Debug, Default, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1.0, message = "rent amount must be positive"))]
    pub rent_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 31, message = "due day must be a day of month"))]
    pub due_day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PropertyStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_property_decodes_with_tenant_annotation() {
        let property: OwnerProperty = serde_json::from_str(
            r#"{
                "propertyId": "pr-7",
                "description": "Two-bedroom in Kacyiru",
                "location": "Kigali",
                "rentAmount": 250000,
                "dueDay": 3,
                "status": "OCCUPIED",
                "tenantName": "Jean Bosco"
            }"#,
        )
        .unwrap();
        assert_eq!(property.status, PropertyStatus::Occupied);
        assert_eq!(property.tenant_name.as_deref(), Some("Jean Bosco"));
    }

    #[test]
    fn update_request_serializes_only_set_fields() {
        let request = UpdatePropertyRequest {
            status: Some(PropertyStatus::Available),
            ..Default::default()
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, serde_json::json!({"status": "AVAILABLE"}));
    }

    #[test]
    fn new_property_request_rejects_out_of_range_due_day() {
        let request = NewPropertyRequest {
            description: "Studio near the market".to_string(),
            location: "Huye".to_string(),
            rent_amount: 80000.0,
            due_day: 40,
        };
        assert!(validator::Validate::validate(&request).is_err());
    }
}

//! Owner screens: portfolio dashboard, tenant verification search,
//! property management.

use chrono::NaiveDate;
use client_core::error::ClientError;
use client_core::session::UserRole;
use owner_client::models::{NewPropertyRequest, PropertyStatus, UpdatePropertyRequest};
use serde_json::json;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};
use workflow_tests::WorkflowTestContext;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
}

#[tokio::test]
async fn dashboard_aggregates_portfolio() {
    let ctx = WorkflowTestContext::spawn().await;
    ctx.login_as("jwt-owner", UserRole::Owner);

    Mock::given(method("GET"))
        .and(path("/owner/properties"))
        .and(header("Authorization", "Bearer jwt-owner"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "propertyId": "pr-1",
                "description": "Two-bedroom in Kacyiru",
                "location": "Kigali",
                "rentAmount": 250000,
                "dueDay": 3,
                "status": "OCCUPIED",
                "tenantName": "Jean Bosco"
            },
            {
                "propertyId": "pr-2",
                "description": "Studio near the market",
                "location": "Huye",
                "rentAmount": 80000,
                "dueDay": 5,
                "status": "AVAILABLE"
            }
        ])))
        .mount(&ctx.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/owner/tenants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "userId": "u-1",
                "fullName": "Jean Bosco",
                "telephone": "+250780000001",
                "propertyId": "pr-1",
                "rentalId": "r-2",
                "rentAmount": 250000,
                "active": true
            }
        ])))
        .mount(&ctx.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/owner/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "paymentId": "p-1",
                "rentalId": "r-2",
                "tenantName": "Jean Bosco",
                "amount": 250000,
                "paymentMethod": "MOBILE_MONEY",
                "status": "COMPLETED",
                "paidDate": "2026-03-04T09:00:00Z"
            },
            {
                "paymentId": "p-2",
                "rentalId": "r-2",
                "tenantName": "Jean Bosco",
                "amount": 100000,
                "paymentMethod": "BANK_TRANSFER",
                "status": "PENDING",
                "paidDate": "2026-03-05T09:00:00Z"
            },
            {
                "paymentId": "p-3",
                "rentalId": "r-2",
                "tenantName": "Jean Bosco",
                "amount": 200000,
                "paymentMethod": "MOBILE_MONEY",
                "status": "COMPLETED",
                "paidDate": "2026-02-10T09:00:00Z"
            }
        ])))
        .mount(&ctx.server)
        .await;

    let cancel = CancellationToken::new();
    let dashboard = ctx.owner.dashboard.load(today(), &cancel).await.unwrap();

    assert_eq!(dashboard.total_properties, 2);
    assert_eq!(dashboard.available_properties, 1);
    assert_eq!(dashboard.occupied_properties, 1);
    assert_eq!(dashboard.tenant_count, 1);
    // Only this month's COMPLETED payment counts.
    assert_eq!(dashboard.collected_this_month, 250000.0);
    // Newest arrival first.
    assert_eq!(dashboard.recent_payments[0].payment_id, "p-3");
}

#[tokio::test]
async fn search_tenant_encodes_the_query() {
    let ctx = WorkflowTestContext::spawn().await;
    ctx.login_as("jwt-owner", UserRole::Owner);

    Mock::given(method("GET"))
        .and(path("/owner/search-tenant"))
        .and(query_param("query", "jean bosco"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "userId": "u-1",
                "fullName": "Jean Bosco",
                "telephone": "+250780000001",
                "hasActiveRental": true,
                "currentProperty": "Two-bedroom in Kacyiru"
            }
        ])))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let cancel = CancellationToken::new();
    let matches = ctx
        .owner
        .tenants
        .search_tenant("jean bosco", &cancel)
        .await
        .unwrap();

    assert_eq!(matches.len(), 1);
    assert!(matches[0].has_active_rental);
}

#[tokio::test]
async fn add_and_update_property() {
    let ctx = WorkflowTestContext::spawn().await;
    ctx.login_as("jwt-owner", UserRole::Owner);

    Mock::given(method("POST"))
        .and(path("/owner/properties"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "propertyId": "pr-9",
            "description": "Family house in Nyamirambo",
            "location": "Kigali",
            "rentAmount": 300000,
            "dueDay": 1,
            "status": "AVAILABLE"
        })))
        .mount(&ctx.server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/owner/properties/pr-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "propertyId": "pr-9",
            "description": "Family house in Nyamirambo",
            "location": "Kigali",
            "rentAmount": 300000,
            "dueDay": 1,
            "status": "OCCUPIED",
            "tenantName": "Aline U."
        })))
        .mount(&ctx.server)
        .await;

    let cancel = CancellationToken::new();
    let property = ctx
        .owner
        .properties
        .add_property(
            NewPropertyRequest {
                description: "Family house in Nyamirambo".to_string(),
                location: "Kigali".to_string(),
                rent_amount: 300000.0,
                due_day: 1,
            },
            &cancel,
        )
        .await
        .unwrap();
    assert_eq!(property.status, PropertyStatus::Available);

    let updated = ctx
        .owner
        .properties
        .update_property(
            "pr-9",
            UpdatePropertyRequest {
                status: Some(PropertyStatus::Occupied),
                ..Default::default()
            },
            &cancel,
        )
        .await
        .unwrap();
    assert_eq!(updated.status, PropertyStatus::Occupied);
    assert_eq!(updated.tenant_name.as_deref(), Some("Aline U."));
}

#[tokio::test]
async fn invalid_property_never_reaches_the_network() {
    let ctx = WorkflowTestContext::spawn().await;
    ctx.login_as("jwt-owner", UserRole::Owner);

    let cancel = CancellationToken::new();
    let result = ctx
        .owner
        .properties
        .add_property(
            NewPropertyRequest {
                description: "Too".to_string(),
                location: "K".to_string(),
                rent_amount: 0.0,
                due_day: 40,
            },
            &cancel,
        )
        .await;

    assert!(matches!(result, Err(ClientError::Validation(_))));
}

#[tokio::test]
async fn owner_notifications_404_reads_as_empty() {
    let ctx = WorkflowTestContext::spawn().await;
    ctx.login_as("jwt-owner", UserRole::Owner);

    Mock::given(method("GET"))
        .and(path("/owner/notifications"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&ctx.server)
        .await;

    let cancel = CancellationToken::new();
    let notifications = ctx.owner.notifications.notifications(&cancel).await.unwrap();
    assert!(notifications.is_empty());
}

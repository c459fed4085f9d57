//! End-to-end tests for the API client against a mocked backend.

use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use artha_client::{ApiClient, ApiConfig, ClientError, Credentials, InvoiceRequest};
use artha_core::types::Quantity;
use artha_core::{InvoiceDraft, InvoiceStatus, Money, Unit};
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde_json::json;

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiConfig::new(server.uri())).expect("client should build")
}

// ============================================================================
// Auth / Session
// ============================================================================

#[tokio::test]
async fn login_attaches_bearer_token_to_later_requests() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_partial_json(json!({"username": "asha"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-123",
            "user": {"username": "asha", "role": "ADMIN"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/products/categories"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Groceries", "Dairy"])))
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    assert!(!api.is_authenticated());

    let user = api
        .auth()
        .login(&Credentials {
            username: "asha".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.role.as_deref(), Some("ADMIN"));
    assert!(api.is_authenticated());
    assert_eq!(api.current_user().unwrap().username, "asha");

    // The categories mock only matches with the bearer header attached
    let categories = api.products().categories().await.unwrap();
    assert_eq!(categories, vec!["Groceries", "Dairy"]);

    api.auth().logout();
    assert!(!api.is_authenticated());
    assert!(api.current_user().is_none());
}

// ============================================================================
// Products / Catalog
// ============================================================================

#[tokio::test]
async fn catalog_fetch_builds_a_searchable_snapshot() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("page", "0"))
        .and(query_param("size", "1000"))
        .and(query_param("sort", "name,asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [
                {
                    "id": 1,
                    "name": "Basmati Rice",
                    "code": "GRO-001",
                    "category": "Groceries",
                    "unit": "KILOGRAMS",
                    "price": "80.00",
                    "mrp": "95.00",
                    "quantity": "42.5",
                    "minStockLevel": "10"
                },
                {
                    "id": 2,
                    "name": "Fresh Milk",
                    "code": "DAI-001",
                    "category": "Dairy",
                    "unit": "LITERS",
                    "price": "30",
                    "quantity": "0",
                    "minStockLevel": "5"
                }
            ],
            "totalElements": 2,
            "totalPages": 1
        })))
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let catalog = api.products().catalog().await.unwrap();

    assert_eq!(catalog.len(), 2);
    let rice = catalog.get(1).unwrap();
    assert_eq!(rice.unit, Unit::Kilograms);
    assert_eq!(rice.price, Money::new(dec!(80)));

    // Search works over the snapshot exactly like the editor will use it
    assert_eq!(catalog.search("dai")[0].id, 2);
    // Milk has no MRP field at all: "no savings data", and it is out of stock
    let milk = catalog.get(2).unwrap();
    assert!(!milk.has_mrp());
    assert!(milk.is_out_of_stock());
}

// ============================================================================
// Invoices
// ============================================================================

fn finished_draft() -> InvoiceDraft {
    let mut draft = InvoiceDraft::new(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
    draft.customer_name = "Asha".to_string();
    draft.tax_amount = Money::new(dec!(5));

    let key = draft.add_item();
    let mut item = draft
        .item(key)
        .unwrap()
        .with_unit_price(Money::new(dec!(10)))
        .with_quantity(Quantity::Value(dec!(3)));
    item.product_id = Some(7);
    item.description = "Basmati Rice".to_string();
    draft.set_item(item);
    draft
}

#[tokio::test]
async fn create_invoice_submits_the_finished_draft() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/invoices"))
        .and(body_partial_json(json!({
            "customerName": "Asha",
            "status": "DRAFT",
            "items": [{"productId": 7, "description": "Basmati Rice"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "invoiceNumber": "INV-042",
            "status": "DRAFT",
            "invoiceDate": "2025-04-01",
            "customerName": "Asha",
            "taxAmount": "5",
            "totalAmount": "35",
            "items": [
                {"productId": 7, "quantity": "3", "unitPrice": "10", "description": "Basmati Rice"}
            ]
        })))
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let draft = finished_draft();
    assert!(draft.validate().is_ok());

    let created = api
        .invoices()
        .create(&InvoiceRequest::from(&draft))
        .await
        .unwrap();

    // The backend assigned the number and the authoritative total
    assert_eq!(created.invoice_number, "INV-042");
    assert_eq!(created.total_amount, dec!(35));
}

#[tokio::test]
async fn status_transition_is_a_query_patch() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/invoices/42/status"))
        .and(query_param("status", "PAID"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    api.invoices()
        .set_status(42, InvoiceStatus::Paid)
        .await
        .unwrap();
}

#[tokio::test]
async fn pdf_bytes_are_passed_through_untouched() {
    let server = MockServer::start().await;
    let body = b"%PDF-1.4 fake".to_vec();

    Mock::given(method("GET"))
        .and(path("/invoices/42/pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    assert_eq!(api.invoices().pdf(42).await.unwrap(), body);
}

// ============================================================================
// Error Envelope
// ============================================================================

#[tokio::test]
async fn backend_validation_errors_surface_joined() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/invoices"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "Validation failed",
            "validationErrors": {
                "customerEmail": "must be a valid email",
                "items": "at least one item is required"
            }
        })))
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let err = api
        .invoices()
        .create(&InvoiceRequest::from(&finished_draft()))
        .await
        .unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 400);
            // BTreeMap: field order is deterministic
            assert_eq!(
                message,
                "must be a valid email, at least one item is required"
            );
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_status_reason() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/categories"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let err = api.products().categories().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "Internal Server Error");
}

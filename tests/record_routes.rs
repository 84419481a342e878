//! Record Route Tests
//!
//! Drives the full router in-process:
//! - POST routes answer 201 with the whole table
//! - GET routes answer 200 with rows in insertion order
//! - Tables are independent
//! - Bad bodies get structured 400/422 errors and leave tables untouched

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use storekeeper::http_server::{HttpServer, HttpServerConfig, WELCOME_MESSAGE};
use storekeeper::schema::{FieldPolicy, MissingFields, UnknownFields};
use storekeeper::store::{RecordStore, TableKind};

// =============================================================================
// Helper Functions
// =============================================================================

fn router_with(records: FieldPolicy) -> (Arc<RecordStore>, Router) {
    let store = Arc::new(RecordStore::new());
    let config = HttpServerConfig {
        records,
        ..Default::default()
    };
    let router = HttpServer::with_store(config, Arc::clone(&store)).router();
    (store, router)
}

fn router() -> Router {
    router_with(FieldPolicy::default()).1
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post(router: &Router, uri: &str, body: &str) -> (StatusCode, String) {
    send(router, "POST", uri, Some(body)).await
}

async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    send(router, "GET", uri, None).await
}

fn parse(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

// =============================================================================
// Root and Health
// =============================================================================

/// GET / returns the welcome text.
#[tokio::test]
async fn test_root_returns_welcome_text() {
    let (status, body) = get(&router(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, WELCOME_MESSAGE);
    assert_eq!(body, "Bem-vindo");
}

/// Health reports table sizes.
#[tokio::test]
async fn test_health_reports_table_sizes() {
    let router = router();
    post(&router, "/add_debtor", r#"{"id":1,"customer_name":"Ana","amount_due":12.5}"#).await;

    let (status, body) = get(&router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    let health = parse(&body);
    assert_eq!(health["status"], "ok");
    assert_eq!(health["inventory"], 0);
    assert_eq!(health["sales"], 0);
    assert_eq!(health["debtors"], 1);
}

// =============================================================================
// Empty Tables
// =============================================================================

/// Every list route starts empty.
#[tokio::test]
async fn test_lists_start_empty() {
    let router = router();
    for uri in ["/get_inventory", "/get_sales", "/get_debtors"] {
        let (status, body) = get(&router, uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body, "[]", "{}", uri);
    }
}

// =============================================================================
// Append and List
// =============================================================================

/// Adding a product answers 201 with the inventory; listing returns the same.
#[tokio::test]
async fn test_add_product_then_get_inventory() {
    let router = router();

    let (status, body) = post(
        &router,
        "/add_product",
        r#"{"id":1,"product_name":"Widget","quantity":10}"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, r#"[{"id":1,"product_name":"Widget","quantity":10}]"#);

    let (status, listed) = get(&router, "/get_inventory").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, body);
}

/// Sales come back in the order they were recorded.
#[tokio::test]
async fn test_sales_keep_insertion_order() {
    let router = router();

    let (status, _) = post(
        &router,
        "/record_sale",
        r#"{"id":1,"product_name":"Widget","quantity_sold":2}"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post(
        &router,
        "/record_sale",
        r#"{"id":2,"product_name":"Gadget","quantity_sold":5}"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(parse(&body).as_array().unwrap().len(), 2);

    let (_, body) = get(&router, "/get_sales").await;
    assert_eq!(
        parse(&body),
        json!([
            {"id": 1, "product_name": "Widget", "quantity_sold": 2},
            {"id": 2, "product_name": "Gadget", "quantity_sold": 5}
        ])
    );
}

/// N appends give N rows, in order.
#[tokio::test]
async fn test_many_appends_preserve_order() {
    let router = router();
    for i in 0..25 {
        let body = json!({"id": i, "customer_name": format!("c{}", i), "amount_due": i * 10});
        let (status, _) = post(&router, "/add_debtor", &body.to_string()).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = get(&router, "/get_debtors").await;
    let rows = parse(&body);
    let ids: Vec<i64> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, (0..25).collect::<Vec<_>>());
}

/// Debtor amounts are echoed as sent.
#[tokio::test]
async fn test_debtor_amount_kept_as_sent() {
    let router = router();
    let (_, body) = post(
        &router,
        "/add_debtor",
        r#"{"id":"D-1","customer_name":"Ana","amount_due":19.99}"#,
    )
    .await;
    assert_eq!(body, r#"[{"id":"D-1","customer_name":"Ana","amount_due":19.99}]"#);
}

/// Appending to one table leaves the other two alone.
#[tokio::test]
async fn test_tables_are_independent() {
    let (store, router) = router_with(FieldPolicy::default());

    post(&router, "/add_product", r#"{"id":1,"product_name":"Widget","quantity":10}"#).await;
    post(&router, "/add_product", r#"{"id":2,"product_name":"Bolt","quantity":99}"#).await;

    assert_eq!(get(&router, "/get_sales").await.1, "[]");
    assert_eq!(get(&router, "/get_debtors").await.1, "[]");
    assert_eq!(store.len(TableKind::Inventory), 2);
    assert!(store.is_empty(TableKind::Sales));
    assert!(store.is_empty(TableKind::Debtors));
}

/// Separate routers over separate stores share nothing.
#[tokio::test]
async fn test_isolated_stores() {
    let first = router();
    let second = router();

    post(&first, "/add_product", r#"{"id":1,"product_name":"Widget"}"#).await;
    assert_eq!(get(&second, "/get_inventory").await.1, "[]");
}

// =============================================================================
// Missing and Unknown Fields
// =============================================================================

/// An empty object is accepted under the default policy and stored as nulls.
#[tokio::test]
async fn test_empty_object_is_degenerate_insert() {
    let (status, body) = post(&router(), "/add_product", "{}").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, r#"[{"id":null,"product_name":null,"quantity":null}]"#);
}

/// Undeclared keys are refused by default and nothing is stored.
#[tokio::test]
async fn test_unknown_field_rejected() {
    let (store, router) = router_with(FieldPolicy::default());

    let (status, body) = post(
        &router,
        "/add_product",
        r#"{"id":1,"product_name":"Widget","colour":"red"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let err = parse(&body);
    assert_eq!(err["code"], 422);
    assert!(err["error"].as_str().unwrap().contains("colour"));
    assert!(store.is_empty(TableKind::Inventory));
}

/// Undeclared keys are dropped under `unknown_fields = ignore`.
#[tokio::test]
async fn test_unknown_field_ignored() {
    let (_, router) = router_with(FieldPolicy {
        unknown_fields: UnknownFields::Ignore,
        missing_fields: MissingFields::Default,
    });

    let (status, body) = post(
        &router,
        "/record_sale",
        r#"{"id":1,"product_name":"Widget","quantity_sold":1,"till":4}"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, r#"[{"id":1,"product_name":"Widget","quantity_sold":1}]"#);
}

/// Required fields are enforced under `missing_fields = reject`.
#[tokio::test]
async fn test_missing_required_field_rejected() {
    let (store, router) = router_with(FieldPolicy::strict());

    let (status, body) = post(&router, "/add_debtor", r#"{"customer_name":"Ana"}"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(parse(&body)["error"].as_str().unwrap().contains("'id'"));
    assert!(store.is_empty(TableKind::Debtors));

    let (status, body) = post(&router, "/add_debtor", r#"{"id":3,"customer_name":"Ana"}"#).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, r#"[{"id":3,"customer_name":"Ana","amount_due":null}]"#);
}

/// Wrong value types are refused.
#[tokio::test]
async fn test_type_mismatch_rejected() {
    let (status, body) = post(
        &router(),
        "/add_product",
        r#"{"id":1,"product_name":"Widget","quantity":"ten"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(parse(&body)["error"].as_str().unwrap().contains("quantity"));
}

/// Integers past i64::MAX are refused with a range error.
#[tokio::test]
async fn test_integer_out_of_range_rejected() {
    let (store, router) = router_with(FieldPolicy::default());
    let (status, body) = post(
        &router,
        "/record_sale",
        r#"{"id":1,"product_name":"Widget","quantity_sold":9223372036854775808}"#,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let body = parse(&body);
    assert_eq!(body["code"], 422);
    assert!(body["error"].as_str().unwrap().contains("out of range"));
    assert!(store.is_empty(TableKind::Sales));
}

// =============================================================================
// Malformed Bodies
// =============================================================================

/// Unparsable JSON is a structured 400.
#[tokio::test]
async fn test_malformed_json_is_400() {
    let (store, router) = router_with(FieldPolicy::default());

    let (status, body) = post(&router, "/record_sale", "not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let err = parse(&body);
    assert_eq!(err["code"], 400);
    assert!(err["error"].as_str().unwrap().starts_with("Invalid request body"));
    assert!(store.is_empty(TableKind::Sales));
}

/// A missing body is a structured 400.
#[tokio::test]
async fn test_empty_body_is_400() {
    let (status, body) = send(&router(), "POST", "/add_debtor", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&body)["code"], 400);
}

/// JSON that is not an object is a structured 400.
#[tokio::test]
async fn test_non_object_is_400() {
    let (status, body) = post(&router(), "/add_product", "[1,2]").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(parse(&body)["error"].as_str().unwrap().contains("array"));
}

/// The content type is not part of the contract.
#[tokio::test]
async fn test_body_accepted_without_json_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/add_product")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(r#"{"id":1,"product_name":"Widget"}"#))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

// =============================================================================
// Routing
// =============================================================================

/// Unknown paths are 404.
#[tokio::test]
async fn test_unknown_path() {
    let (status, _) = get(&router(), "/get_everything").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Wrong verbs are 405.
#[tokio::test]
async fn test_wrong_method() {
    let (status, _) = get(&router(), "/add_product").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = post(&router(), "/get_sales", "{}").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// CORS
// =============================================================================

fn cors_router(origins: &[&str]) -> Router {
    let config = HttpServerConfig {
        cors_origins: origins.iter().map(|o| o.to_string()).collect(),
        ..Default::default()
    };
    config.validate().unwrap();
    HttpServer::with_config(config).router()
}

async fn allowed_origin(router: &Router, origin: &str) -> Option<String> {
    let request = Request::builder()
        .method("GET")
        .uri("/get_inventory")
        .header(header::ORIGIN, origin)
        .body(Body::empty())
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .map(|v| v.to_str().unwrap().to_string())
}

/// With no configured origins every caller is allowed.
#[tokio::test]
async fn test_cors_permissive_by_default() {
    let allowed = allowed_origin(&router(), "http://anywhere.example.com").await;
    assert_eq!(allowed.as_deref(), Some("*"));
}

/// Configured origins are echoed back; others get no allow header.
#[tokio::test]
async fn test_cors_limited_to_configured_origins() {
    let router = cors_router(&["http://shop.example.com", "http://localhost:3000"]);

    let allowed = allowed_origin(&router, "http://shop.example.com").await;
    assert_eq!(allowed.as_deref(), Some("http://shop.example.com"));

    let allowed = allowed_origin(&router, "http://localhost:3000").await;
    assert_eq!(allowed.as_deref(), Some("http://localhost:3000"));

    assert_eq!(allowed_origin(&router, "http://evil.example.com").await, None);
}

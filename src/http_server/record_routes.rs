//! Record HTTP Routes
//!
//! Create and list endpoints for the three tables. Every POST answers with
//! the whole table after the append.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

use crate::observability::{log_event_with_fields, Event};
use crate::schema::{FieldPolicy, SchemaValidator};
use crate::store::{DebtorRecord, InventoryItem, Record, RecordStore, SaleRecord};

use super::errors::{ApiError, ApiResult};

/// Body of `GET /`
pub const WELCOME_MESSAGE: &str = "Bem-vindo";

// ==================
// Shared State
// ==================

/// State shared across record handlers
pub struct RecordsState {
    pub store: Arc<RecordStore>,
    pub validator: SchemaValidator,
}

impl RecordsState {
    pub fn new(store: Arc<RecordStore>, policy: FieldPolicy) -> Self {
        Self {
            store,
            validator: SchemaValidator::new(policy),
        }
    }
}

// ==================
// Record Routes
// ==================

/// Create record routes
pub fn record_routes(state: Arc<RecordsState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        // Inventory
        .route("/add_product", post(append_handler::<InventoryItem>))
        .route("/get_inventory", get(list_handler::<InventoryItem>))
        // Sales
        .route("/record_sale", post(append_handler::<SaleRecord>))
        .route("/get_sales", get(list_handler::<SaleRecord>))
        // Debtors
        .route("/add_debtor", post(append_handler::<DebtorRecord>))
        .route("/get_debtors", get(list_handler::<DebtorRecord>))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn home_handler() -> &'static str {
    WELCOME_MESSAGE
}

async fn append_handler<R: Record>(
    State(state): State<Arc<RecordsState>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Vec<R>>)> {
    let record = parse_record::<R>(&state.validator, &body).inspect_err(|e| {
        log_event_with_fields(
            Event::RecordRejected,
            &[("table", R::TABLE.as_str()), ("reason", e.to_string().as_str())],
        );
    })?;

    let rows = state.store.append(record);
    log_event_with_fields(
        Event::RecordAppended,
        &[("table", R::TABLE.as_str()), ("rows", rows.len().to_string().as_str())],
    );

    Ok((StatusCode::CREATED, Json(rows)))
}

async fn list_handler<R: Record>(State(state): State<Arc<RecordsState>>) -> Json<Vec<R>> {
    Json(state.store.list::<R>())
}

// ==================
// Helper Functions
// ==================

/// Parse a raw body into a record. The content type is not checked.
fn parse_record<R: Record>(validator: &SchemaValidator, body: &[u8]) -> ApiResult<R> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::InvalidBody("request body is empty".to_string()));
    }

    let value: Value = serde_json::from_slice(body)?;
    Ok(validator.validate_record::<R>(&value)?)
}

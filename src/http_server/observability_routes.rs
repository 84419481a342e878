//! Observability HTTP Routes
//!
//! Health check and per-request logging.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::observability::{log_event_with_fields, Event, Logger};
use crate::store::{RecordStore, TableKind};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub inventory: usize,
    pub sales: usize,
    pub debtors: usize,
}

/// Health check route
pub fn health_routes(store: Arc<RecordStore>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(store)
}

/// Health check handler
async fn health_handler(State(store): State<Arc<RecordStore>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        inventory: store.len(TableKind::Inventory),
        sales: store.len(TableKind::Sales),
        debtors: store.len(TableKind::Debtors),
    };

    (StatusCode::OK, Json(response))
}

/// Middleware logging one REQUEST_COMPLETE event per request
pub async fn observe_request(request: Request, next: Next) -> Response {
    let event = Event::RequestComplete;
    if !Logger::enabled(event.severity()) {
        return next.run(request).await;
    }

    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed_ms = start.elapsed().as_millis().to_string();
    let status = response.status().as_u16().to_string();
    log_event_with_fields(
        event,
        &[
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("status", status.as_str()),
            ("elapsed_ms", elapsed_ms.as_str()),
        ],
    );

    response
}

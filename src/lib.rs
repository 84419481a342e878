//! storekeeper - in-memory inventory, sales and debtors over HTTP
//!
//! Three append-only tables held by a `RecordStore`, exposed through a
//! small axum router. Nothing is persisted.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod schema;
pub mod store;

//! # storekeeper HTTP Server Module
//!
//! Axum server exposing the record store.
//!
//! # Endpoints
//!
//! - `/` - Welcome text
//! - `/add_product`, `/record_sale`, `/add_debtor` - Append a record (POST)
//! - `/get_inventory`, `/get_sales`, `/get_debtors` - List a table (GET)
//! - `/health` - Health check with table sizes

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod record_routes;
pub mod server;

pub use config::{ConfigError, HttpServerConfig};
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use record_routes::{RecordsState, WELCOME_MESSAGE};
pub use server::HttpServer;

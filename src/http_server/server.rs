//! # HTTP Server
//!
//! Combines the record and health routers behind CORS and request logging.

use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, observe_request};
use super::record_routes::{record_routes, RecordsState};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::store::RecordStore;

/// HTTP server owning the record store
pub struct HttpServer {
    config: HttpServerConfig,
    store: Arc<RecordStore>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with a fresh, empty store
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_store(config, Arc::new(RecordStore::new()))
    }

    /// Create a new HTTP server around an existing store
    pub fn with_store(config: HttpServerConfig, store: Arc<RecordStore>) -> Self {
        let router = Self::build_router(&config, Arc::clone(&store));
        Self {
            config,
            store,
            router,
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, store: Arc<RecordStore>) -> Router {
        let records_state = Arc::new(RecordsState::new(Arc::clone(&store), config.records));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            // Validated configs never drop an origin here
            let origins = config.cors_header_values().unwrap_or_default();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(record_routes(records_state))
            .merge(health_routes(store))
            .layer(
                ServiceBuilder::new()
                    .layer(middleware::from_fn(observe_request))
                    .layer(cors),
            )
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Shared handle to the store
    pub fn store(&self) -> Arc<RecordStore> {
        Arc::clone(&self.store)
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> std::io::Result<()> {
        self.start_with_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    pub async fn start_with_shutdown<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        self.config
            .validate_host()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

        // Resolves hostnames such as `localhost` as well as IPv4/IPv6 literals
        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;
        let local_addr = listener.local_addr()?.to_string();
        log_event_with_fields(Event::Serving, &[("addr", local_addr.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                log_event(Event::ShutdownStart);
            })
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all resource handlers
//! - Wire up middleware (tracing, timeout, CORS)
//! - Serve on an already-bound listener with graceful shutdown
//!
//! Every route maps 1:1 to one store call; there is no cross-resource
//! orchestration and no state beyond the shared store handle.

use std::time::Duration;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::http::routes;
use crate::store::Store;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

/// HTTP server for the catalog API.
pub struct HttpServer {
    router: Router,
    config: ApiConfig,
}

impl HttpServer {
    /// Create a new HTTP server over a connected store handle.
    pub fn new(config: ApiConfig, store: Store) -> Self {
        let state = AppState { store };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all resource routes and middleware layers.
    fn build_router(config: &ApiConfig, state: AppState) -> Router {
        let cors = if config.cors.allowed_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<HeaderValue> = config
                .cors
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/", get(liveness))
            .merge(routes::users::routes())
            .merge(routes::products::routes())
            .merge(routes::categories::routes())
            .merge(routes::carts::routes())
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Clone of the built router, for driving the surface in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// `GET /` — liveness probe, not part of the data API.
async fn liveness() -> &'static str {
    "TechTonic catalog API is running"
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}

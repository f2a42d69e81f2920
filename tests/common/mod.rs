//! Shared utilities for surface-level API tests.

use axum::Router;
use mongodb::Client;
use techtonic_api::config::ApiConfig;
use techtonic_api::http::HttpServer;
use techtonic_api::store::Store;

/// Build the full router over a lazily-connecting store handle.
///
/// The driver only dials the cluster on the first operation, so every route
/// that answers before its store call can be driven without a database.
pub async fn test_router() -> Router {
    let client = Client::with_uri_str("mongodb://127.0.0.1:27017")
        .await
        .expect("parse test connection string");
    let store = Store::new(client.database("techTonicTest"));
    HttpServer::new(ApiConfig::default(), store).router()
}

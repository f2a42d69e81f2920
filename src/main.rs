//! TechTonic Catalog API
//!
//! A REST API over a document database for an e-commerce catalog, built
//! with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────────┐
//!                    │                 CATALOG API                    │
//!                    │                                                │
//!   Client Request   │  ┌─────────┐    ┌──────────────┐              │
//!   ─────────────────┼─▶│  http   │───▶│   routes     │              │
//!                    │  │ server  │    │ users/products│              │
//!                    │  └─────────┘    │ categories/   │              │
//!                    │                 │ carts         │              │
//!                    │                 └──────┬───────┘              │
//!                    │                        │ one store call       │
//!                    │                        ▼ per request          │
//!   Client Response  │  ┌─────────┐    ┌──────────────┐              │
//!   ◀────────────────┼──│ results │◀───│    store     │◀─────────────┼──── Document
//!                    │  │  JSON   │    │    handle    │              │     Store
//!                    │  └─────────┘    └──────────────┘              │
//!                    │                                                │
//!                    │  ┌──────────────────────────────────────────┐ │
//!                    │  │          Cross-Cutting Concerns           │ │
//!                    │  │  ┌─────────┐ ┌──────────┐ ┌───────────┐  │ │
//!                    │  │  │ config  │ │observa-  │ │  errors   │  │ │
//!                    │  │  │         │ │ bility   │ │           │  │ │
//!                    │  │  └─────────┘ └──────────┘ └───────────┘  │ │
//!                    │  └──────────────────────────────────────────┘ │
//!                    └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use techtonic_api::config::loader::resolve_config;
use techtonic_api::http::HttpServer;
use techtonic_api::store::Store;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "techtonic-api", version)]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "techtonic_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("techtonic-api v0.1.0 starting");

    let args = Args::parse();
    let config = resolve_config(args.config.as_deref())?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        database = %config.database.name,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Connect the store once for the whole process; the handle is shared
    // by every route.
    let store = Store::connect(&config.database).await?;

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config, store);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

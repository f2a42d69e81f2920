//! Store connection and collection handles.

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection, Database};
use thiserror::Error;

use crate::catalog::{Cart, Category, Product, User};
use crate::config::DatabaseConfig;

/// Collection names used by the catalog.
pub const USERS: &str = "users";
pub const PRODUCTS: &str = "products";
pub const CATEGORIES: &str = "categories";
pub const CARTS: &str = "carts";

/// Errors that can occur while establishing the store connection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection string was rejected by the driver.
    #[error("connection options error: {0}")]
    Options(mongodb::error::Error),

    /// Startup ping did not succeed.
    #[error("ping failed: {0}")]
    Ping(mongodb::error::Error),
}

/// Long-lived handle over the catalog's collections.
///
/// Created once at startup and shared by clone; the driver manages the
/// underlying connection pool.
#[derive(Clone)]
pub struct Store {
    database: Database,
}

impl Store {
    /// Connect to the cluster and verify the connection with a ping.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(config.connection_uri())
            .await
            .map_err(StoreError::Options)?;
        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        let client = Client::with_options(options).map_err(StoreError::Options)?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(StoreError::Ping)?;

        tracing::info!(database = %config.name, "Connected to document store");

        Ok(Self::new(client.database(&config.name)))
    }

    /// Wrap an already-selected database.
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    pub fn users(&self) -> Collection<User> {
        self.database.collection(USERS)
    }

    pub fn products(&self) -> Collection<Product> {
        self.database.collection(PRODUCTS)
    }

    pub fn categories(&self) -> Collection<Category> {
        self.database.collection(CATEGORIES)
    }

    pub fn carts(&self) -> Collection<Cart> {
        self.database.collection(CARTS)
    }
}

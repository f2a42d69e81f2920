//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the API.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the catalog API.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ApiConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Document store connection settings.
    pub database: DatabaseConfig,

    /// Cross-origin resource sharing settings.
    pub cors: CorsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
        }
    }
}

/// Document store connection settings.
///
/// Either `uri` is given verbatim, or a `mongodb+srv` connection string is
/// derived from the credential and cluster fields.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Full connection string. When set, the remaining connection fields
    /// are ignored.
    pub uri: Option<String>,

    /// Database user. Overridable via the `DB_USER` environment variable.
    pub user: String,

    /// Database password. Overridable via the `DB_PASSWORD` environment
    /// variable.
    pub password: String,

    /// Cluster hostname (e.g., "cluster0.dpqxpzb.mongodb.net").
    pub cluster_host: String,

    /// Application name reported to the cluster.
    pub app_name: String,

    /// Database to select after connecting.
    pub name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: None,
            user: String::new(),
            password: String::new(),
            cluster_host: "cluster0.dpqxpzb.mongodb.net".to_string(),
            app_name: "Cluster0".to_string(),
            name: "techTonicDb".to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Connection string used to reach the cluster.
    pub fn connection_uri(&self) -> String {
        match &self.uri {
            Some(uri) => uri.clone(),
            None => format!(
                "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority&appName={}",
                self.user, self.password, self.cluster_host, self.app_name
            ),
        }
    }
}

/// Cross-origin resource sharing settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the API. Empty means any origin.
    pub allowed_origins: Vec<String>,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (environment overrides: PORT, DB_USER, DB_PASSWORD)
//!     → validation.rs (semantic checks)
//!     → ApiConfig (validated, immutable)
//!     → shared with the HTTP server and store at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no runtime reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ApiConfig;
pub use schema::CorsConfig;
pub use schema::DatabaseConfig;
pub use schema::ListenerConfig;
pub use schema::TimeoutConfig;

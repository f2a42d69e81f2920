//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the bind address parses and credentials are usable
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ApiConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::ApiConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Listener bind address is not a valid socket address.
    InvalidBindAddress(String),
    /// Database name is empty.
    EmptyDatabaseName,
    /// No explicit URI and no credentials to derive one from.
    MissingCredentials,
    /// Request timeout must be non-zero.
    ZeroRequestTimeout,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "invalid bind address '{}'", addr)
            }
            ValidationError::EmptyDatabaseName => write!(f, "database name must not be empty"),
            ValidationError::MissingCredentials => {
                write!(f, "database.uri or database.user/password must be set")
            }
            ValidationError::ZeroRequestTimeout => {
                write!(f, "timeouts.request_secs must be greater than zero")
            }
        }
    }
}

/// Validate a parsed configuration, collecting every failure.
pub fn validate_config(config: &ApiConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.database.name.is_empty() {
        errors.push(ValidationError::EmptyDatabaseName);
    }

    if config.database.uri.is_none()
        && (config.database.user.is_empty() || config.database.password.is_empty())
    {
        errors.push(ValidationError::MissingCredentials);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

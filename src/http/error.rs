//! API error taxonomy and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors a route handler can surface to the caller.
///
/// Not-found reads are deliberately absent: a missing document is a success
/// with a null/empty body, never an error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A user with the same email already exists.
    #[error("User already exists")]
    DuplicateUser,

    /// Path id could not be parsed into a store object id.
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// The document store failed the operation.
    #[error("Store operation failed: {0}")]
    Store(#[from] mongodb::error::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::DuplicateUser => StatusCode::CONFLICT,
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if let ApiError::Store(error) = &self {
            tracing::error!(error = %error, "Store operation failed");
        }

        // The duplicate-user body keeps the insertedId slot callers expect
        // from a successful create.
        let body = match &self {
            ApiError::DuplicateUser => json!({
                "message": self.to_string(),
                "insertedId": null,
            }),
            _ => json!({ "message": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_user_maps_to_conflict_with_null_inserted_id() {
        let response = ApiError::DuplicateUser.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn invalid_id_maps_to_bad_request() {
        let response = ApiError::InvalidId("not-hex".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn messages_are_descriptive() {
        assert_eq!(ApiError::DuplicateUser.to_string(), "User already exists");
        assert_eq!(
            ApiError::InvalidId("xyz".into()).to_string(),
            "Invalid identifier: xyz"
        );
    }
}

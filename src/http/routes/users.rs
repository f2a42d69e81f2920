//! User routes.
//!
//! Email is the external key for reads, updates, and role changes; deletion
//! goes through the store-generated id.

use axum::extract::{Path, State};
use axum::routing::{get, patch};
use axum::{Json, Router};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson};

use crate::catalog::{RoleUpdate, User, UserUpdate};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::store::{DeleteOutcome, InsertOutcome, UpdateOutcome};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{email}",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .route("/users/{email}/role", patch(set_role))
}

/// `GET /users` — every user document, unfiltered.
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users: Vec<User> = state.store.users().find(doc! {}).await?.try_collect().await?;
    Ok(Json(users))
}

/// `GET /users/{email}` — one user by exact email match, null when absent.
async fn get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Option<User>>, ApiError> {
    let user = state.store.users().find_one(doc! { "email": &email }).await?;
    Ok(Json(user))
}

/// `POST /users` — guarded insert: a second document with an already-known
/// email is rejected, leaving exactly one document per email.
async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> Result<Json<InsertOutcome>, ApiError> {
    let filter = doc! { "email": user.email.clone().map(Bson::from).unwrap_or(Bson::Null) };
    if state.store.users().find_one(filter).await?.is_some() {
        return Err(ApiError::DuplicateUser);
    }

    let result = state.store.users().insert_one(&user).await?;
    tracing::debug!(email = ?user.email, "User created");
    Ok(Json(result.into()))
}

/// `DELETE /users/{email}` — the path value here is the store id, not the
/// email; zero deletions is a success, not an error.
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOutcome>, ApiError> {
    let id = ObjectId::parse_str(&id).map_err(|_| ApiError::InvalidId(id))?;
    let result = state.store.users().delete_one(doc! { "_id": id }).await?;
    Ok(Json(result.into()))
}

/// `PATCH /users/{email}` — upsert the fixed allow-list projection.
async fn update_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(update): Json<UserUpdate>,
) -> Result<Json<UpdateOutcome>, ApiError> {
    let result = state
        .store
        .users()
        .update_one(doc! { "email": &email }, update.set_document())
        .upsert(true)
        .await?;
    Ok(Json(result.into()))
}

/// `PATCH /users/{email}/role` — upsert-merge of the `isAdmin` flag only;
/// every other field is left untouched.
async fn set_role(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(role): Json<RoleUpdate>,
) -> Result<Json<UpdateOutcome>, ApiError> {
    let result = state
        .store
        .users()
        .update_one(doc! { "email": &email }, role.set_document())
        .upsert(true)
        .await?;
    Ok(Json(result.into()))
}

//! Cart routes.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use futures_util::TryStreamExt;
use mongodb::bson::doc;

use crate::catalog::Cart;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::store::InsertOutcome;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/carts", post(create_cart))
        .route("/carts/{email}", get(carts_for_user))
}

/// `GET /carts/{email}` — every cart belonging to the given email.
async fn carts_for_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Cart>>, ApiError> {
    let carts: Vec<Cart> = state
        .store
        .carts()
        .find(doc! { "email": &email })
        .await?
        .try_collect()
        .await?;
    Ok(Json(carts))
}

/// `POST /carts` — unconditional insert; deleting a user never cascades
/// here, carts are independent documents.
async fn create_cart(
    State(state): State<AppState>,
    Json(cart): Json<Cart>,
) -> Result<Json<InsertOutcome>, ApiError> {
    let result = state.store.carts().insert_one(&cart).await?;
    tracing::debug!(email = ?cart.email, "Cart created");
    Ok(Json(result.into()))
}

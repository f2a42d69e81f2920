//! Product routes.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};

use crate::catalog::{Product, ProductUpdate};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::store::{DeleteOutcome, InsertOutcome, UpdateOutcome};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).patch(update_product).delete(delete_product),
        )
}

/// `GET /products` — every product document, unfiltered.
async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products: Vec<Product> = state
        .store
        .products()
        .find(doc! {})
        .await?
        .try_collect()
        .await?;
    Ok(Json(products))
}

/// `GET /products/{id}` — one product by id, null when absent.
async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Product>>, ApiError> {
    let id = ObjectId::parse_str(&id).map_err(|_| ApiError::InvalidId(id))?;
    let product = state.store.products().find_one(doc! { "_id": id }).await?;
    Ok(Json(product))
}

/// `POST /products` — unconditional insert, no duplicate check.
async fn create_product(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<Json<InsertOutcome>, ApiError> {
    let result = state.store.products().insert_one(&product).await?;
    tracing::debug!(name = ?product.name, "Product created");
    Ok(Json(result.into()))
}

/// `DELETE /products/{id}` — zero deletions is a success, not an error.
async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOutcome>, ApiError> {
    let id = ObjectId::parse_str(&id).map_err(|_| ApiError::InvalidId(id))?;
    let result = state.store.products().delete_one(doc! { "_id": id }).await?;
    Ok(Json(result.into()))
}

/// `PATCH /products/{id}` — upsert the flat allow-list projection.
async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<ProductUpdate>,
) -> Result<Json<UpdateOutcome>, ApiError> {
    let id = ObjectId::parse_str(&id).map_err(|_| ApiError::InvalidId(id))?;
    let result = state
        .store
        .products()
        .update_one(doc! { "_id": id }, update.set_document())
        .upsert(true)
        .await?;
    Ok(Json(result.into()))
}

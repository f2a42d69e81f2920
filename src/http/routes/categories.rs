//! Category routes.
//!
//! The name-scoped listing queries the product collection, not the category
//! collection: it returns the products filed under the given category.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use futures_util::TryStreamExt;
use mongodb::bson::doc;

use crate::catalog::{Category, Product};
use crate::http::error::ApiError;
use crate::http::server::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{categoryName}", get(products_in_category))
}

/// `GET /categories` — every category document.
async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    let categories: Vec<Category> = state
        .store
        .categories()
        .find(doc! {})
        .await?
        .try_collect()
        .await?;
    Ok(Json(categories))
}

/// `GET /categories/{categoryName}` — all products whose `category` equals
/// the given name; unknown names yield an empty list.
async fn products_in_category(
    State(state): State<AppState>,
    Path(category_name): Path<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products: Vec<Product> = state
        .store
        .products()
        .find(doc! { "category": &category_name })
        .await?
        .try_collect()
        .await?;
    Ok(Json(products))
}

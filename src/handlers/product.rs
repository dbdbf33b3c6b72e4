//! Product handlers: read, list by category, create, update, delete.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::models::{Product, ProductInput};
use crate::response;
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};

const INVALID_ID: &str = "Invalid product ID";
const INVALID_CATEGORY: &str = "Invalid category ID";

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, INVALID_ID)?;
    let row = state
        .store
        .find_product(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".into()))?;
    Ok(response::ok(row))
}

/// `GET /api/products?category=ID`. The `category` parameter is mandatory; when repeated, the first one wins.
pub async fn list_by_category(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let raw = params
        .iter()
        .find(|(key, _)| key == "category")
        .map(|(_, value)| value.as_str())
        .unwrap_or("");
    let category_id = parse_id(raw, INVALID_CATEGORY)?;
    let rows = state.store.list_products_by_category(category_id).await?;
    Ok(response::ok(rows))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<ProductInput>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::new_product(&body)?;
    let id = state.store.create_product(&body).await?;
    tracing::info!(id, category_id = body.category_id, "product created");
    Ok(response::created(Product::from_input(id, body)))
}

/// Full overwrite: fields missing from the body are stored as zero values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<ApiJson<ProductInput>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, INVALID_ID)?;
    let ApiJson(body) = body?;
    let affected = state.store.update_product(id, &body).await?;
    tracing::debug!(id, affected, "product update");
    Ok(response::message("Product updated successfully"))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, INVALID_ID)?;
    let affected = state.store.delete_product(id).await?;
    tracing::debug!(id, affected, "product delete");
    Ok(response::message("Product deleted successfully"))
}

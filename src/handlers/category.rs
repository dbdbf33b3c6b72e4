//! Category handlers: list, read, create, update, delete.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::models::{Category, CategoryInput};
use crate::response;
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

const INVALID_ID: &str = "Invalid category ID";

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.list_categories().await?;
    Ok(response::ok(rows))
}

/// A missing row surfaces as a store failure (500), not as 404.
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, INVALID_ID)?;
    let row = state.store.get_category(id).await?;
    Ok(response::ok(row))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CategoryInput>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::category(&body)?;
    let id = state.store.create_category(&body).await?;
    tracing::info!(id, "category created");
    Ok(response::created(Category::from_input(id, body)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<ApiJson<CategoryInput>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, INVALID_ID)?;
    let ApiJson(body) = body?;
    RequestValidator::category(&body)?;
    let affected = state.store.update_category(id, &body).await?;
    tracing::debug!(id, affected, "category update");
    Ok(response::message("Category updated successfully"))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, INVALID_ID)?;
    let affected = state.store.delete_category(id).await?;
    tracing::debug!(id, affected, "category delete");
    Ok(response::message("Category deleted successfully"))
}

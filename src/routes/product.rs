//! Product routes.

use crate::handlers::product::{create, delete, list_by_category, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/products", get(list_by_category).post(create))
        .route("/api/products/:id", get(read).put(update).delete(delete))
        .with_state(state)
}

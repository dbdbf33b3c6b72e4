//! Category routes. Create lives at `/categories`, outside the `/api` prefix the other routes use.

use crate::handlers::category::{create, delete, list, read, update};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn category_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/categories", get(list))
        .route("/categories", post(create))
        .route("/api/categories/:id", get(read).put(update).delete(delete))
        .with_state(state)
}

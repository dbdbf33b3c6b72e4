//! Route tables. Each builder returns a stateless `Router` ready to merge.

mod category;
mod common;
mod product;

pub use category::category_routes;
pub use common::common_routes;
pub use product::product_routes;

use crate::state::AppState;
use axum::Router;

/// Every route the service exposes, without middleware.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(category_routes(state.clone()))
        .merge(product_routes(state))
}

//! Catalog API: REST CRUD over categories and products, backed by PostgreSQL.

pub mod app;
pub mod config;
pub mod database;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError, StoreError};
pub use state::AppState;
pub use store::{CatalogStore, MemoryStore, PgCatalogStore};

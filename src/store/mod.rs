//! Persistence seam. Handlers talk to a [`CatalogStore`]; every method issues at most one statement.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgCatalogStore;

use crate::error::StoreError;
use crate::models::{Category, CategoryInput, Product, ProductInput, ProductSummary};
use async_trait::async_trait;

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Round-trip to the backing database. Used by the readiness probe.
    async fn ping(&self) -> Result<(), StoreError>;

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    /// Fails with [`StoreError::NoRows`] when the id matches nothing.
    async fn get_category(&self, id: i32) -> Result<Category, StoreError>;

    /// Returns the generated id.
    async fn create_category(&self, input: &CategoryInput) -> Result<i32, StoreError>;

    /// Returns the number of rows affected.
    async fn update_category(&self, id: i32, input: &CategoryInput) -> Result<u64, StoreError>;

    /// Returns the number of rows affected.
    async fn delete_category(&self, id: i32) -> Result<u64, StoreError>;

    async fn find_product(&self, id: i32) -> Result<Option<Product>, StoreError>;

    async fn list_products_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<ProductSummary>, StoreError>;

    /// Returns the generated id.
    async fn create_product(&self, input: &ProductInput) -> Result<i32, StoreError>;

    /// Overwrites every column. Returns the number of rows affected.
    async fn update_product(&self, id: i32, input: &ProductInput) -> Result<u64, StoreError>;

    /// Returns the number of rows affected.
    async fn delete_product(&self, id: i32) -> Result<u64, StoreError>;
}

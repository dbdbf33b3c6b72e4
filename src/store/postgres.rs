//! PostgreSQL-backed store. Statements are fixed; values are always bound as parameters.

use super::CatalogStore;
use crate::database;
use crate::error::StoreError;
use crate::models::{Category, CategoryInput, Product, ProductInput, ProductSummary};
use async_trait::async_trait;
use sqlx::PgPool;

const LIST_CATEGORIES: &str = "SELECT id, name FROM categories";
const GET_CATEGORY: &str = "SELECT id, name FROM categories WHERE id = $1";
const INSERT_CATEGORY: &str = "INSERT INTO categories (name) VALUES ($1) RETURNING id";
const UPDATE_CATEGORY: &str = "UPDATE categories SET name = $1 WHERE id = $2";
const DELETE_CATEGORY: &str = "DELETE FROM categories WHERE id = $1";

// price is cast so NUMERIC and DOUBLE PRECISION columns both decode as f64.
const GET_PRODUCT: &str = "SELECT id, name, description, price::float8 AS price, image_url, category_id \
     FROM products WHERE id = $1";
const LIST_PRODUCTS_BY_CATEGORY: &str = "SELECT id, name, description, price::float8 AS price, image_url \
     FROM products WHERE category_id = $1";
const INSERT_PRODUCT: &str = "INSERT INTO products (name, description, price, image_url, category_id) \
     VALUES ($1, $2, $3, $4, $5) RETURNING id";
const UPDATE_PRODUCT: &str = "UPDATE products SET name = $1, description = $2, price = $3, \
     image_url = $4, category_id = $5 WHERE id = $6";
const DELETE_PRODUCT: &str = "DELETE FROM products WHERE id = $1";

#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn ping(&self) -> Result<(), StoreError> {
        database::check_health(&self.pool).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        tracing::debug!(sql = %LIST_CATEGORIES, "query");
        let rows = sqlx::query_as::<_, Category>(LIST_CATEGORIES)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_category(&self, id: i32) -> Result<Category, StoreError> {
        tracing::debug!(sql = %GET_CATEGORY, id, "query");
        sqlx::query_as::<_, Category>(GET_CATEGORY)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NoRows)
    }

    async fn create_category(&self, input: &CategoryInput) -> Result<i32, StoreError> {
        tracing::debug!(sql = %INSERT_CATEGORY, "query");
        let id: i32 = sqlx::query_scalar(INSERT_CATEGORY)
            .bind(&input.name)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn update_category(&self, id: i32, input: &CategoryInput) -> Result<u64, StoreError> {
        tracing::debug!(sql = %UPDATE_CATEGORY, id, "query");
        let result = sqlx::query(UPDATE_CATEGORY)
            .bind(&input.name)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_category(&self, id: i32) -> Result<u64, StoreError> {
        tracing::debug!(sql = %DELETE_CATEGORY, id, "query");
        let result = sqlx::query(DELETE_CATEGORY)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn find_product(&self, id: i32) -> Result<Option<Product>, StoreError> {
        tracing::debug!(sql = %GET_PRODUCT, id, "query");
        let row = sqlx::query_as::<_, Product>(GET_PRODUCT)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_products_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<ProductSummary>, StoreError> {
        tracing::debug!(sql = %LIST_PRODUCTS_BY_CATEGORY, category_id, "query");
        let rows = sqlx::query_as::<_, ProductSummary>(LIST_PRODUCTS_BY_CATEGORY)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create_product(&self, input: &ProductInput) -> Result<i32, StoreError> {
        tracing::debug!(sql = %INSERT_PRODUCT, "query");
        let id: i32 = sqlx::query_scalar(INSERT_PRODUCT)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.image_url)
            .bind(input.category_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn update_product(&self, id: i32, input: &ProductInput) -> Result<u64, StoreError> {
        tracing::debug!(sql = %UPDATE_PRODUCT, id, "query");
        let result = sqlx::query(UPDATE_PRODUCT)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.image_url)
            .bind(input.category_id)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_product(&self, id: i32) -> Result<u64, StoreError> {
        tracing::debug!(sql = %DELETE_PRODUCT, id, "query");
        let result = sqlx::query(DELETE_PRODUCT)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

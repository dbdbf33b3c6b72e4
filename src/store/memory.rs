//! In-process fake used by handler tests.
//! Ids are handed out like a SERIAL column; listing follows id order.

use super::CatalogStore;
use crate::error::StoreError;
use crate::models::{Category, CategoryInput, Product, ProductInput, ProductSummary};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    products: BTreeMap<i32, Product>,
    last_category_id: i32,
    last_product_id: i32,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: i32) -> Result<Category, StoreError> {
        self.tables
            .read()
            .await
            .categories
            .get(&id)
            .cloned()
            .ok_or(StoreError::NoRows)
    }

    async fn create_category(&self, input: &CategoryInput) -> Result<i32, StoreError> {
        let mut t = self.tables.write().await;
        t.last_category_id += 1;
        let id = t.last_category_id;
        t.categories
            .insert(id, Category::from_input(id, input.clone()));
        Ok(id)
    }

    async fn update_category(&self, id: i32, input: &CategoryInput) -> Result<u64, StoreError> {
        let mut t = self.tables.write().await;
        match t.categories.get_mut(&id) {
            Some(c) => {
                c.name = input.name.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_category(&self, id: i32) -> Result<u64, StoreError> {
        let removed = self.tables.write().await.categories.remove(&id);
        Ok(removed.map_or(0, |_| 1))
    }

    async fn find_product(&self, id: i32) -> Result<Option<Product>, StoreError> {
        Ok(self.tables.read().await.products.get(&id).cloned())
    }

    async fn list_products_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<ProductSummary>, StoreError> {
        Ok(self
            .tables
            .read()
            .await
            .products
            .values()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .map(ProductSummary::from)
            .collect())
    }

    async fn create_product(&self, input: &ProductInput) -> Result<i32, StoreError> {
        let mut t = self.tables.write().await;
        t.last_product_id += 1;
        let id = t.last_product_id;
        t.products.insert(id, Product::from_input(id, input.clone()));
        Ok(id)
    }

    async fn update_product(&self, id: i32, input: &ProductInput) -> Result<u64, StoreError> {
        let mut t = self.tables.write().await;
        match t.products.get_mut(&id) {
            Some(p) => {
                *p = Product::from_input(id, input.clone());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_product(&self, id: i32) -> Result<u64, StoreError> {
        let removed = self.tables.write().await.products.remove(&id);
        Ok(removed.map_or(0, |_| 1))
    }
}

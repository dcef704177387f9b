use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use tracing::debug;

use crate::domain::{CatalogProduct, ProductId, Stock};
use crate::error::{ServiceError, StorageError};
use crate::ports::{CartStorage, CatalogService, InventoryService};

/// Catalog and inventory held in process memory.
#[derive(Default)]
pub struct InMemoryCatalog {
    entries: RwLock<HashMap<ProductId, (CatalogProduct, i64)>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `product` with `stock` units available, replacing any previous entry.
    pub fn insert(&self, product: CatalogProduct, stock: i64) {
        self.entries.write().insert(product.id, (product, stock));
    }

    /// Changes the stock level of a known product. Returns false if the id is unknown.
    pub fn set_stock(&self, product_id: ProductId, amount: i64) -> bool {
        match self.entries.write().get_mut(&product_id) {
            Some((_, stock)) => {
                *stock = amount;
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl InventoryService for InMemoryCatalog {
    async fn get_stock(&self, product_id: ProductId) -> Result<Stock, ServiceError> {
        let entries = self.entries.read();
        let (_, amount) = entries.get(&product_id).ok_or(ServiceError::NotFound(product_id))?;
        debug!(product_id, stock = amount, "Stock lookup");
        Ok(Stock::new(product_id, *amount))
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalog {
    async fn get_product(&self, product_id: ProductId) -> Result<CatalogProduct, ServiceError> {
        self.entries
            .read()
            .get(&product_id)
            .map(|(product, _)| product.clone())
            .ok_or(ServiceError::NotFound(product_id))
    }
}

/// Key-value store held in process memory. Contents die with the process.
#[derive(Default)]
pub struct InMemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one record.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.values.lock().insert(key.into(), value.into());
        storage
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }
}

#[async_trait]
impl CartStorage for InMemoryStorage {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    async fn save(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.values.lock().insert(key.to_string(), value);
        Ok(())
    }
}

use async_trait::async_trait;

use crate::domain::{CatalogProduct, ProductId};
use crate::error::ServiceError;

/// Source of product metadata for new cart entries.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn get_product(&self, product_id: ProductId) -> Result<CatalogProduct, ServiceError>;
}

use async_trait::async_trait;

use crate::domain::{ProductId, Stock};
use crate::error::ServiceError;

/// Source of live stock levels.
///
/// Queried on every mutating cart operation; results are never cached.
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Current stock for `product_id`. Fails when the product is unknown or
    /// the service cannot be reached.
    async fn get_stock(&self, product_id: ProductId) -> Result<Stock, ServiceError>;
}

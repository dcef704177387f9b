use serde::{Deserialize, Serialize};

use super::ProductId;

/// Inventory availability for one product, as reported by the inventory service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    pub amount: i64,
}

impl Stock {
    pub fn new(id: ProductId, amount: i64) -> Self {
        Self { id, amount }
    }

    /// Whether `requested` units fit within this stock level.
    pub fn covers(&self, requested: i64) -> bool {
        requested <= self.amount
    }
}

use thiserror::Error;

use crate::domain::ProductId;

/// Shown when a requested quantity is above available stock.
pub const STOCK_EXCEEDED_MESSAGE: &str = "Quantidade solicitada fora de estoque";

/// The three cart mutations, used to pick the message reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    UpdateAmount,
}

impl CartOperation {
    /// Generic failure text for this operation.
    pub fn failure_message(self) -> &'static str {
        match self {
            CartOperation::Add => "Erro na adição do produto",
            CartOperation::Remove => "Erro na remoção do produto",
            CartOperation::UpdateAmount => "Erro na alteração de quantidade do produto",
        }
    }
}

/// Why a cart mutation did not go through.
///
/// None of these leave the cart partially modified.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Insufficient stock for product {product_id}: requested {requested}, available {available}")]
    StockExceeded {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },
    #[error("Product not in cart: {0}")]
    EntryNotFound(ProductId),
    #[error("Collaborator failure: {0}")]
    Collaborator(#[from] ServiceError),
    #[error("Invalid amount: {0}")]
    InvalidAmount(i64),
}

impl CartError {
    /// Text to hand to the notification sink, or `None` when the failure is silent.
    pub fn user_message(&self, operation: CartOperation) -> Option<&'static str> {
        match self {
            CartError::StockExceeded { .. } => Some(STOCK_EXCEEDED_MESSAGE),
            CartError::EntryNotFound(_) | CartError::Collaborator(_) => {
                Some(operation.failure_message())
            }
            CartError::InvalidAmount(_) => None,
        }
    }
}

/// Failures reported by the inventory and catalog services.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

/// Failures reading or writing the persisted cart.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Corrupted cart record: {0}")]
    Corrupted(#[from] InvalidCart),
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// A deserialized cart that breaks the cart invariants.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidCart {
    #[error("duplicate product id {0}")]
    DuplicateProduct(ProductId),
    #[error("product {id} has non-positive amount {amount}")]
    NonPositiveAmount { id: ProductId, amount: i64 },
}

/// The cart store could not be reached.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

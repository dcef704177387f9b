use tokio::sync::oneshot;

use crate::domain::{Cart, ProductId};
use crate::error::CartError;

/// Reply channel carried by every request.
pub type Responder<T> = oneshot::Sender<T>;

/// Requested quantity for one cart entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountUpdate {
    pub product_id: ProductId,
    pub amount: i64,
}

impl AmountUpdate {
    pub fn new(product_id: ProductId, amount: i64) -> Self {
        Self { product_id, amount }
    }
}

/// Result of one mutating cart operation.
///
/// A rejected operation still produces an outcome: `cart` is then the
/// unchanged state and `rejection` says why.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome {
    pub cart: Cart,
    /// The operation replaced the cart with a different value.
    pub changed: bool,
    pub rejection: Option<CartError>,
}

impl MutationOutcome {
    pub fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Typed messages for the cart actor. Each variant carries its parameters
/// and a oneshot channel for the response.
#[derive(Debug)]
pub enum CartRequest {
    GetCart {
        respond_to: Responder<Cart>,
    },
    AddProduct {
        product_id: ProductId,
        respond_to: Responder<MutationOutcome>,
    },
    RemoveProduct {
        product_id: ProductId,
        respond_to: Responder<MutationOutcome>,
    },
    UpdateProductAmount {
        update: AmountUpdate,
        respond_to: Responder<MutationOutcome>,
    },
    Shutdown,
    #[cfg(test)]
    GetPersistedSnapshot {
        respond_to: Responder<Cart>,
    },
}

//! Reading and writing the cart record in the persistence service.

use tracing::{debug, info, instrument, warn};

use crate::domain::{Cart, Product};
use crate::error::StorageError;
use crate::ports::CartStorage;

/// Stored cart under `key`, `None` if nothing was saved yet.
pub async fn load(storage: &dyn CartStorage, key: &str) -> Result<Option<Cart>, StorageError> {
    match storage.load(key).await? {
        Some(raw) => Ok(Some(parse(&raw)?)),
        None => Ok(None),
    }
}

fn parse(raw: &str) -> Result<Cart, StorageError> {
    let products: Vec<Product> = serde_json::from_str(raw)?;
    Ok(Cart::try_from(products)?)
}

/// Startup recovery path: the stored cart if there is a usable one, otherwise
/// an empty cart.
///
/// Missing, unreadable and corrupted records all land here as empty; only the
/// log tells them apart.
#[instrument(skip(storage))]
pub async fn load_or_default(storage: &dyn CartStorage, key: &str) -> Cart {
    match load(storage, key).await {
        Ok(Some(cart)) => {
            info!(entries = cart.len(), "Restored persisted cart");
            cart
        }
        Ok(None) => {
            debug!("No persisted cart, starting empty");
            Cart::default()
        }
        Err(e) => {
            warn!(error = %e, "Persisted cart unusable, starting empty");
            Cart::default()
        }
    }
}

/// Writes `cart` under `key`.
pub async fn save(storage: &dyn CartStorage, key: &str, cart: &Cart) -> Result<(), StorageError> {
    let serialized = serde_json::to_string(cart)?;
    storage.save(key, serialized).await
}

//! Stock reconciliation for the three cart mutations.
//!
//! Each function takes the current cart by reference and returns the cart that
//! should replace it, or the reason it must stay as it is. Nothing here
//! touches persistence or notifications; the cart service decides what to do
//! with the result.

use tracing::{debug, instrument};

use crate::domain::{Cart, Product, ProductId, Stock};
use crate::error::CartError;
use crate::messages::AmountUpdate;
use crate::ports::{CatalogService, InventoryService};

fn ensure_in_stock(product_id: ProductId, requested: i64, stock: &Stock) -> Result<(), CartError> {
    if stock.covers(requested) {
        Ok(())
    } else {
        debug!(requested, available = stock.amount, "Requested amount out of stock");
        Err(CartError::StockExceeded {
            product_id,
            requested,
            available: stock.amount,
        })
    }
}

/// One more unit of `product_id`.
///
/// Always asks the inventory for stock; asks the catalog for metadata only
/// when the product is not in the cart yet.
#[instrument(skip(cart, inventory, catalog))]
pub async fn add_product(
    cart: &Cart,
    product_id: ProductId,
    inventory: &dyn InventoryService,
    catalog: &dyn CatalogService,
) -> Result<Cart, CartError> {
    let current = cart.find(product_id).map(|p| p.amount);
    let stock = inventory.get_stock(product_id).await?;
    // An amount already at the integer ceiling cannot be covered by any stock.
    let requested = current.unwrap_or(0).checked_add(1).ok_or(CartError::StockExceeded {
        product_id,
        requested: i64::MAX,
        available: stock.amount,
    })?;
    ensure_in_stock(product_id, requested, &stock)?;

    match current {
        Some(_) => cart
            .with_amount(product_id, requested)
            .ok_or(CartError::EntryNotFound(product_id)),
        None => {
            let metadata = catalog.get_product(product_id).await?;
            Ok(cart.with_product(Product::from_catalog(product_id, metadata, 1)))
        }
    }
}

/// Drops the entry for `product_id`.
pub fn remove_product(cart: &Cart, product_id: ProductId) -> Result<Cart, CartError> {
    cart.without(product_id).ok_or(CartError::EntryNotFound(product_id))
}

/// Sets the entry for `update.product_id` to exactly `update.amount`.
///
/// Non-positive amounts are rejected before any service is called. Stock is
/// checked before the entry is looked up, so an out-of-stock request for a
/// product not in the cart reports the stock problem.
#[instrument(skip(cart, update, inventory), fields(product_id = update.product_id, amount = update.amount))]
pub async fn update_product_amount(
    cart: &Cart,
    update: AmountUpdate,
    inventory: &dyn InventoryService,
) -> Result<Cart, CartError> {
    if update.amount <= 0 {
        return Err(CartError::InvalidAmount(update.amount));
    }

    let stock = inventory.get_stock(update.product_id).await?;
    ensure_in_stock(update.product_id, update.amount, &stock)?;

    cart.with_amount(update.product_id, update.amount)
        .ok_or(CartError::EntryNotFound(update.product_id))
}

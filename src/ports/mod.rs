//! Interfaces to the services the cart store depends on but does not own.

mod catalog;
mod inventory;
mod notifier;
mod storage;

pub use catalog::*;
pub use inventory::*;
pub use notifier::*;
pub use storage::*;

use std::sync::Arc;

/// Everything the cart service talks to, bundled for injection.
#[derive(Clone)]
pub struct Collaborators {
    pub inventory: Arc<dyn InventoryService>,
    pub catalog: Arc<dyn CatalogService>,
    pub storage: Arc<dyn CartStorage>,
    pub notifier: Arc<dyn Notifier>,
}

impl Collaborators {
    pub fn new(
        inventory: Arc<dyn InventoryService>,
        catalog: Arc<dyn CatalogService>,
        storage: Arc<dyn CartStorage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            inventory,
            catalog,
            storage,
            notifier,
        }
    }
}

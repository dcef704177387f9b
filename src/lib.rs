//! # Cart Store
//!
//! Shopping-cart state kept by a single actor. The actor checks every
//! quantity change against live inventory, reports failures to a notifier and
//! writes the cart to a key-value store whenever it changes.
//!
//! - **Domain types**: [`Cart`], [`Product`], [`Stock`]
//! - **Ports**: [`InventoryService`], [`CatalogService`], [`CartStorage`], [`Notifier`]
//! - **Actor**: [`CartService`] owns the cart; [`CartClient`] talks to it
//! - **System**: [`CartSystem`] restores the persisted cart and runs the actor
//!
//! ```rust,ignore
//! let system = CartSystem::start(&config, collaborators).await;
//!
//! let outcome = system.cart_client.add_product(1).await?;
//! if let Some(reason) = outcome.rejection {
//!     // already reported to the notifier
//! }
//!
//! system.shutdown().await?;
//! ```

pub mod actors;
pub mod adapters;
pub mod app_system;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod messages;
pub mod ports;

#[cfg(test)]
mod mock_framework;

pub use actors::CartService;
pub use app_system::{setup_tracing, CartSystem};
pub use clients::CartClient;
pub use config::CartConfig;
pub use domain::{Cart, CatalogProduct, Product, ProductId, Stock};
pub use error::{CartError, CartOperation, ClientError, ServiceError, StorageError};
pub use messages::{AmountUpdate, MutationOutcome};
pub use ports::{CartStorage, CatalogService, Collaborators, InventoryService, Notifier};

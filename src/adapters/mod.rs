//! Reference implementations of the collaborator ports.

mod file_storage;
mod memory;
mod notifier;

pub use file_storage::JsonFileStorage;
pub use memory::{InMemoryCatalog, InMemoryStorage};
pub use notifier::TracingNotifier;

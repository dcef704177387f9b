//! System orchestration, startup, and shutdown logic.

pub mod cart_system;
pub mod logging;

pub use cart_system::*;
pub use logging::*;

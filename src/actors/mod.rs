//! The cart actor and the logic it runs.

mod cart_service;
pub mod mutations;
pub mod persistence;

pub use cart_service::CartService;

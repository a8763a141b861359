//! `stockbook-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod serial;

pub use entity::Entity;
pub use error::{InventoryError, InventoryResult};
pub use serial::SerialNumber;

//! Error model for the inventory domain and its persistence layer.

use thiserror::Error;

use crate::serial::SerialNumber;

/// Result type used across the domain layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Duplicate/not-found conditions are recoverable and reported to the
/// caller; nothing here is fatal. Persistence wraps the underlying failure
/// as text so the error stays cloneable and comparable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// An item with this serial number already exists (add).
    #[error("item with serial `{0}` already exists")]
    DuplicateKey(SerialNumber),

    /// No item with this serial number (update/remove).
    #[error("no item with serial `{0}`")]
    NotFound(SerialNumber),

    /// A persisted record was missing a required field, or its value could
    /// not be decoded as the expected type.
    #[error("persisted record is missing usable field `{0}`")]
    MissingField(String),

    /// File I/O or whole-file decoding failed during save/load.
    #[error("persistence failure: {0}")]
    Persistence(String),
}

impl InventoryError {
    pub fn duplicate_key(serial: impl Into<SerialNumber>) -> Self {
        Self::DuplicateKey(serial.into())
    }

    pub fn not_found(serial: impl Into<SerialNumber>) -> Self {
        Self::NotFound(serial.into())
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }
}

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

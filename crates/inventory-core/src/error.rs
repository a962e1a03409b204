//! Error types for inventory core operations.
//!
//! Errors are descriptive at the core level. The ledger itself never returns
//! them from `load`/`save`; they surface from the storage layer and from
//! `add_untyped`, and the CLI maps them to user-facing messages.

use thiserror::Error;

/// Result type alias for inventory operations.
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Core error type for inventory operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Input failed type validation at the JSON boundary
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage backend error (I/O)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Stored content could not be parsed as an inventory
    #[error("Malformed inventory: {0}")]
    Malformed(String),
}

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        InventoryError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            InventoryError::Storage(err.to_string())
        } else {
            InventoryError::Malformed(err.to_string())
        }
    }
}

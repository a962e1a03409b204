//! Storage trait definition.
//!
//! The `StockStore` trait defines the interface that inventory backends
//! implement, so the ledger does not care where its quantities live.

use crate::error::Result;
use crate::quantities::Quantities;

/// Persistent home for a ledger's quantities.
///
/// Implementations must ensure:
/// - `read` never returns a partially applied inventory
/// - `write` replaces the previous contents as a whole
pub trait StockStore {
    /// Human-readable location used in diagnostics (e.g. a file path).
    fn location(&self) -> String;

    /// Read the stored quantities.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(quantities))` if found, `Ok(None)` if nothing has
    /// been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Malformed` if the stored content is not an
    /// inventory, or `InventoryError::Storage` if it cannot be read.
    fn read(&self) -> Result<Option<Quantities>>;

    /// Replace the stored quantities.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Storage` if the write fails. The previous
    /// contents are left intact in that case.
    fn write(&self, quantities: &Quantities) -> Result<()>;
}

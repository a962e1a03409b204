//! The inventory ledger.
//!
//! An `InventoryLedger` owns an ordered item -> quantity map and keeps one
//! invariant: every stored quantity is strictly positive. Operations never
//! fail outright. Routine conditions (unknown item, missing file, bad file,
//! failed write) are reported through `tracing` and returned as outcome
//! values the caller may inspect or ignore.

use std::path::Path;

use chrono::Local;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::error::{InventoryError, Result};
use crate::quantities::Quantities;
use crate::storage::{JsonFileStore, StockStore};

/// Threshold used by `low_items` callers that have no configured value.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Result of [`InventoryLedger::add`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Empty item name; nothing happened.
    Skipped,
    /// Item is now held at `quantity`.
    Stocked { quantity: i64 },
    /// A negative delta left nothing; the item is absent.
    Depleted,
    /// The new total does not fit in an `i64`; nothing happened.
    Overflowed,
}

/// Result of [`InventoryLedger::remove`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Item was not in the ledger; nothing happened.
    NotFound,
    /// Item is still held, at `remaining`.
    Decremented { remaining: i64 },
    /// Item reached zero or below and was deleted.
    Depleted,
    /// The remainder does not fit in an `i64`; nothing happened.
    Overflowed,
}

/// Result of [`InventoryLedger::load`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Ledger replaced with `items` entries from the store.
    Loaded { items: usize },
    /// Nothing stored yet; ledger reset to empty.
    Missing,
    /// Stored content was not an inventory; ledger unchanged.
    Malformed,
    /// Store could not be read; ledger unchanged.
    Unreadable,
}

impl LoadOutcome {
    /// True when the ledger now mirrors the store (loaded or fresh).
    pub fn is_usable(self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. } | LoadOutcome::Missing)
    }
}

/// Result of [`InventoryLedger::save`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Failed,
}

/// In-memory stock ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryLedger {
    quantities: Quantities,
}

impl InventoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quantities(&self) -> &Quantities {
        &self.quantities
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Items and quantities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.quantities.iter()
    }

    /// Add `qty` (any sign) to `item`.
    ///
    /// On success a line of the form `"<timestamp>: Added <qty> of <item>"`
    /// is logged and, when `log` is given, appended to it.
    pub fn add(&mut self, item: &str, qty: i64, log: Option<&mut Vec<String>>) -> AddOutcome {
        if item.is_empty() {
            return AddOutcome::Skipped;
        }

        let Some(total) = self.quantities.get(item).unwrap_or(0).checked_add(qty) else {
            error!("Quantity overflow adding {} to '{}'", qty, item);
            return AddOutcome::Overflowed;
        };
        let outcome = if total > 0 {
            self.quantities.insert(item, total);
            AddOutcome::Stocked { quantity: total }
        } else {
            if self.quantities.remove(item).is_some() {
                info!("Removed all '{}' from inventory", item);
            }
            AddOutcome::Depleted
        };

        let entry = format!(
            "{}: Added {} of {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
            qty,
            item
        );
        info!("{}", entry);
        if let Some(log) = log {
            log.push(entry);
        }
        outcome
    }

    /// Add from untyped JSON input, validating types first.
    ///
    /// A falsy item (`null`, `false`, `""`) is skipped silently like an
    /// empty name in [`add`](Self::add).
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Validation` if the item is not a string or
    /// the quantity is not an integer. The ledger is left unchanged.
    pub fn add_untyped(
        &mut self,
        item: &Value,
        qty: &Value,
        log: Option<&mut Vec<String>>,
    ) -> Result<AddOutcome> {
        if matches!(item, Value::Null | Value::Bool(false)) {
            return Ok(AddOutcome::Skipped);
        }
        let Some(item) = item.as_str() else {
            let message = format!("Invalid item type: {}. Expected string.", kind_of(item));
            error!("{}", message);
            return Err(InventoryError::Validation(message));
        };
        let Some(qty) = qty.as_i64() else {
            let message = format!(
                "Invalid quantity type: {}. Expected integer.",
                kind_of(qty)
            );
            error!("{}", message);
            return Err(InventoryError::Validation(message));
        };
        Ok(self.add(item, qty, log))
    }

    /// Take `qty` of `item` out of stock, deleting it at zero or below.
    pub fn remove(&mut self, item: &str, qty: i64) -> RemoveOutcome {
        let Some(current) = self.quantities.get(item) else {
            error!("Item '{}' not found in inventory", item);
            return RemoveOutcome::NotFound;
        };

        let Some(remaining) = current.checked_sub(qty) else {
            error!("Quantity overflow removing {} from '{}'", qty, item);
            return RemoveOutcome::Overflowed;
        };
        if remaining <= 0 {
            self.quantities.remove(item);
            info!("Removed all '{}' from inventory", item);
            RemoveOutcome::Depleted
        } else {
            self.quantities.insert(item, remaining);
            RemoveOutcome::Decremented { remaining }
        }
    }

    /// Quantity on hand, or 0 for an unknown item.
    pub fn quantity(&self, item: &str) -> i64 {
        self.quantities.get(item).unwrap_or(0)
    }

    /// Items held strictly below `threshold`, in ledger order.
    pub fn low_items(&self, threshold: i64) -> Vec<String> {
        self.quantities
            .iter()
            .filter(|(_, quantity)| *quantity < threshold)
            .map(|(item, _)| item.to_string())
            .collect()
    }

    /// Replace the ledger with the contents of the JSON file at `path`.
    pub fn load(&mut self, path: impl AsRef<Path>) -> LoadOutcome {
        self.load_from(&JsonFileStore::new(path.as_ref()))
    }

    /// Write the ledger to the JSON file at `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> SaveOutcome {
        self.save_to(&JsonFileStore::new(path.as_ref()))
    }

    /// Replace the ledger with the contents of `store`.
    ///
    /// A missing inventory resets the ledger to empty. Unreadable or
    /// malformed content leaves the current contents untouched.
    pub fn load_from(&mut self, store: &dyn StockStore) -> LoadOutcome {
        let location = store.location();
        match store.read() {
            Ok(Some(mut quantities)) => {
                quantities.retain(|item, quantity| {
                    if quantity > 0 {
                        true
                    } else {
                        warn!(
                            "Dropping '{}' from {}: quantity {} is not positive",
                            item, location, quantity
                        );
                        false
                    }
                });
                let items = quantities.len();
                self.quantities = quantities;
                info!("Successfully loaded data from {}", location);
                LoadOutcome::Loaded { items }
            }
            Ok(None) => {
                warn!(
                    "File {} not found. Starting with empty inventory.",
                    location
                );
                self.quantities = Quantities::new();
                LoadOutcome::Missing
            }
            Err(InventoryError::Malformed(detail)) => {
                error!("Invalid JSON in {}: {}", location, detail);
                LoadOutcome::Malformed
            }
            Err(err) => {
                error!("Error loading {}: {}", location, err);
                LoadOutcome::Unreadable
            }
        }
    }

    /// Persist the ledger to `store`.
    pub fn save_to(&self, store: &dyn StockStore) -> SaveOutcome {
        let location = store.location();
        match store.write(&self.quantities) {
            Ok(()) => {
                info!("Successfully saved data to {}", location);
                SaveOutcome::Saved
            }
            Err(err) => {
                error!("Error saving to {}: {}", location, err);
                SaveOutcome::Failed
            }
        }
    }
}

impl From<Quantities> for InventoryLedger {
    fn from(mut quantities: Quantities) -> Self {
        quantities.retain(|_, quantity| quantity > 0);
        Self { quantities }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() => "integer",
        Value::Number(n) if n.is_u64() => "out-of-range integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

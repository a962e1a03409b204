//! # Inventory Core
//!
//! Core library for Inventory - a small, file-backed stock ledger.
//!
//! This crate provides the ledger, its ordered quantity map, and the storage
//! abstraction used to persist it, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **ledger**: The in-memory ledger and its mutation/query operations
//! - **quantities**: Insertion-ordered item -> quantity map
//! - **storage**: Storage trait and the JSON file implementation
//! - **fs**: Atomic file replacement

pub mod error;
pub mod fs;
pub mod ledger;
pub mod quantities;
pub mod storage;

pub use error::{InventoryError, Result};
pub use ledger::{
    AddOutcome, InventoryLedger, LoadOutcome, RemoveOutcome, SaveOutcome,
    DEFAULT_LOW_STOCK_THRESHOLD,
};
pub use quantities::Quantities;
pub use storage::{JsonFileStore, StockStore, DEFAULT_INVENTORY_PATH};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Storage abstraction for inventories.
//!
//! This module defines the `StockStore` trait and the JSON file backend.
//!
//! ## Architecture
//!
//! The storage layer is backend-agnostic:
//! - `JsonFileStore`: a single pretty-printed JSON object on disk
//!
//! Store methods are fallible and report precise errors. The ledger's
//! `load`/`save` wrap them and degrade every failure to a diagnostic.

pub mod json_file;
pub mod traits;

// Re-export public types
pub use json_file::{JsonFileStore, DEFAULT_INVENTORY_PATH};
pub use traits::StockStore;

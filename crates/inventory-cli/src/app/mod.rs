//! Application-level utilities for the Inventory CLI.
//!
//! This module provides:
//! - Path resolution for config and inventory files
//! - The shared command context, which loads the inventory for a command

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;

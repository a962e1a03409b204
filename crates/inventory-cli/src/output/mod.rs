//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying the inventory
//! as a plain-text report or as JSON.

mod json;
mod text;

// Re-export public API
pub use json::{inventory_json, low_items_json, quantity_json};
pub use text::print_report;

//! JSON output formatting.

use inventory_core::InventoryLedger;

/// The whole inventory, rendered exactly as the inventory file lays it out.
///
/// Keys stay in ledger order; a `serde_json::Value` round trip would sort them.
pub fn inventory_json(ledger: &InventoryLedger) -> serde_json::Result<String> {
    serde_json::to_string_pretty(ledger.quantities())
}

/// A single item lookup.
pub fn quantity_json(item: &str, quantity: i64) -> serde_json::Value {
    serde_json::json!({
        "item": item,
        "quantity": quantity,
    })
}

/// Low-stock scan result.
pub fn low_items_json(threshold: i64, items: &[String]) -> serde_json::Value {
    serde_json::json!({
        "threshold": threshold,
        "items": items,
    })
}

//! Demonstration scenario.
//!
//! Starts from an empty ledger, exercises every ledger operation (including
//! a rejected untyped add and a removal of an unknown item), then saves to
//! and reloads from the inventory file, replacing its contents.

use inventory_core::{InventoryLedger, SaveOutcome, DEFAULT_LOW_STOCK_THRESHOLD};
use serde_json::json;
use tracing::info;

use crate::app::AppContext;
use crate::output::print_report;

pub fn handle_demo(ctx: &AppContext) -> anyhow::Result<()> {
    let path = ctx.inventory_path()?;
    info!("Starting inventory system");

    let mut ledger = InventoryLedger::new();
    let mut log = Vec::new();

    let _ = ledger.add("apple", 10, Some(&mut log));
    let _ = ledger.add("banana", 5, Some(&mut log));

    // Rejected at the JSON boundary; the error is already logged.
    let _ = ledger.add_untyped(&json!(123), &json!("ten"), Some(&mut log));

    let _ = ledger.remove("apple", 3);
    let _ = ledger.remove("orange", 1);

    println!("Apple stock: {}", ledger.quantity("apple"));
    println!(
        "Low items: {:?}",
        ledger.low_items(DEFAULT_LOW_STOCK_THRESHOLD)
    );

    if ledger.save(&path) == SaveOutcome::Failed {
        return Err(anyhow::anyhow!(
            "Could not save inventory to {}",
            path.display()
        ));
    }
    let reloaded = ledger.load(&path);
    print_report(&ledger);

    if !ctx.quiet() {
        println!("Activity log:");
        for entry in &log {
            println!("  {}", entry);
        }
    }

    if reloaded.is_usable() {
        info!("Inventory system operations completed successfully");
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "Could not reload inventory from {}",
            path.display()
        ))
    }
}


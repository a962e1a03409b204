//! Plain-text inventory report.

use std::fmt::Write;

use inventory_core::InventoryLedger;

const RULE_WIDTH: usize = 50;

/// Render the inventory report.
///
/// Items are left-aligned in 20 columns, quantities right-aligned in 5.
pub fn render_report(ledger: &InventoryLedger) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "INVENTORY REPORT");
    let _ = writeln!(out, "{}", rule);
    if ledger.is_empty() {
        let _ = writeln!(out, "No items in inventory");
    } else {
        for (item, quantity) in ledger.iter() {
            let _ = writeln!(out, "{:20} -> {:5}", item, quantity);
        }
    }
    let _ = writeln!(out, "{}", rule);
    out
}

pub fn print_report(ledger: &InventoryLedger) {
    println!("{}", render_report(ledger));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_rows() {
        let mut ledger = InventoryLedger::new();
        let _ = ledger.add("apple", 7, None);
        let _ = ledger.add("banana", 5, None);

        let report = render_report(&ledger);
        assert!(report.starts_with("\n=================================================="));
        assert!(report.contains("\nINVENTORY REPORT\n"));
        assert!(report.contains("\napple                ->     7\n"));
        assert!(report.contains("\nbanana               ->     5\n"));
    }

    #[test]
    fn test_report_empty() {
        let report = render_report(&InventoryLedger::new());
        assert!(report.contains("No items in inventory"));
    }
}

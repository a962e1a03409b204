//! Read-only commands.

use crate::app::AppContext;
use crate::cli::{GetArgs, LowArgs, ReportArgs};
use crate::output::{inventory_json, low_items_json, print_report, quantity_json};

pub fn handle_get(ctx: &AppContext, args: &GetArgs) -> anyhow::Result<()> {
    let (ledger, _path) = ctx.open_ledger()?;
    let quantity = ledger.quantity(&args.item);

    if args.json {
        let output = serde_json::to_string_pretty(&quantity_json(&args.item, quantity))?;
        println!("{}", output);
    } else if ctx.quiet() {
        println!("{}", quantity);
    } else {
        println!("{} stock: {}", args.item, quantity);
    }
    Ok(())
}

pub fn handle_low(ctx: &AppContext, args: &LowArgs) -> anyhow::Result<()> {
    let threshold = ctx.low_stock_threshold(args.threshold)?;
    let (ledger, _path) = ctx.open_ledger()?;
    let items = ledger.low_items(threshold);

    if args.json {
        let output = serde_json::to_string_pretty(&low_items_json(threshold, &items))?;
        println!("{}", output);
        return Ok(());
    }

    if items.is_empty() {
        if !ctx.quiet() {
            println!("No items below {}", threshold);
        }
        return Ok(());
    }
    for item in &items {
        if ctx.quiet() {
            println!("{}", item);
        } else {
            println!("{:20} -> {:5}", item, ledger.quantity(item));
        }
    }
    Ok(())
}

pub fn handle_report(ctx: &AppContext, args: &ReportArgs) -> anyhow::Result<()> {
    let (ledger, _path) = ctx.open_ledger()?;
    if args.json {
        println!("{}", inventory_json(&ledger)?);
    } else {
        print_report(&ledger);
    }
    Ok(())
}

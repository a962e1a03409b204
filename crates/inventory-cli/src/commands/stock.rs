//! Commands that change stock levels.

use std::path::Path;

use inventory_core::{AddOutcome, InventoryLedger, RemoveOutcome, SaveOutcome};

use crate::app::AppContext;
use crate::cli::{AddArgs, RemoveArgs};
use crate::errors::CliError;

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    if args.item.trim().is_empty() {
        return Err(CliError::invalid_input(
            "Item name must not be empty",
            "Hint: Pass an item name, e.g. `inventory add apple 10`.",
        )
        .into());
    }

    let (mut ledger, path) = ctx.open_ledger()?;
    let outcome = ledger.add(&args.item, args.qty, None);
    if outcome == AddOutcome::Overflowed {
        return Err(overflow_error(&args.item));
    }
    persist(&ledger, &path)?;

    if !ctx.quiet() {
        match outcome {
            AddOutcome::Stocked { quantity } => {
                println!("Added {} of {} (now {})", args.qty, args.item, quantity)
            }
            AddOutcome::Depleted => println!("{} is out of stock", args.item),
            AddOutcome::Skipped | AddOutcome::Overflowed => {}
        }
    }
    Ok(())
}

pub fn handle_remove(ctx: &AppContext, args: &RemoveArgs) -> anyhow::Result<()> {
    let (mut ledger, path) = ctx.open_ledger()?;
    match ledger.remove(&args.item, args.qty) {
        RemoveOutcome::NotFound => {
            return Err(CliError::not_found(
                format!("Item '{}' not found in inventory", args.item),
                "Hint: Run `inventory report` to see stocked items.",
            )
            .into());
        }
        RemoveOutcome::Overflowed => return Err(overflow_error(&args.item)),
        RemoveOutcome::Decremented { remaining } => {
            persist(&ledger, &path)?;
            if !ctx.quiet() {
                println!("Removed {} of {} (now {})", args.qty, args.item, remaining);
            }
        }
        RemoveOutcome::Depleted => {
            persist(&ledger, &path)?;
            if !ctx.quiet() {
                println!("Removed all {}", args.item);
            }
        }
    }
    Ok(())
}

fn overflow_error(item: &str) -> anyhow::Error {
    CliError::invalid_input(
        format!("Quantity for '{}' would overflow", item),
        "Hint: Quantities must stay within a 64-bit signed integer.",
    )
    .into()
}

fn persist(ledger: &InventoryLedger, path: &Path) -> anyhow::Result<()> {
    match ledger.save(path) {
        SaveOutcome::Saved => Ok(()),
        SaveOutcome::Failed => Err(anyhow::anyhow!(
            "Could not save inventory to {}",
            path.display()
        )),
    }
}

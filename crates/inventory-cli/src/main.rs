//! Inventory CLI - track item quantities in a JSON file and flag low stock
//!
//! This is the command-line interface for Inventory. Each invocation loads
//! the inventory file, runs one command against the ledger, and saves it
//! back when the command changed stock.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands, ReportArgs};
use crate::commands::{demo, misc, query, stock};
use crate::errors::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        if let Some(cli_error) = e.downcast_ref::<CliError>() {
            cli_error.exit();
        }
        eprintln!("Error: {}", e);
        if let Some(hint) = extract_error_hint(&e.to_string()) {
            eprintln!("{}", hint);
        }
        std::process::exit(1);
    }
}

/// Provide contextual hints for common error messages.
fn extract_error_hint(error: &str) -> Option<String> {
    let error_lower = error.to_lowercase();

    if error_lower.contains("could not save") {
        return Some(
            "Hint: Ensure the inventory file's directory exists and is writable.".to_string(),
        );
    }

    if error_lower.contains("could not be read") {
        return Some(
            "Hint: Check that the inventory path points to a readable file, not a directory."
                .to_string(),
        );
    }

    if error_lower.contains("failed to parse config") {
        return Some(
            "Hint: Check the TOML syntax in your config file (see INVENTORY_CONFIG).".to_string(),
        );
    }

    None
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Add(args)) => {
            stock::handle_add(ctx, args)?;
        }
        Some(Commands::Remove(args)) => {
            stock::handle_remove(ctx, args)?;
        }
        Some(Commands::Get(args)) => {
            query::handle_get(ctx, args)?;
        }
        Some(Commands::Low(args)) => {
            query::handle_low(ctx, args)?;
        }
        Some(Commands::Report(args)) => {
            query::handle_report(ctx, args)?;
        }
        Some(Commands::Demo) => {
            demo::handle_demo(ctx)?;
        }
        Some(Commands::Completions { shell }) => {
            misc::handle_completions(*shell)?;
        }
        None => {
            query::handle_report(ctx, &ReportArgs::default())?;
        }
    }
    Ok(())
}

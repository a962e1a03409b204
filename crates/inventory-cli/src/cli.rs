use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use inventory_core::VERSION;

/// Inventory - track item quantities in a JSON file and flag low stock
#[derive(Parser)]
#[command(name = "inventory")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the inventory file
    #[arg(short, long, global = true, env = "INVENTORY_PATH")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output, warnings and errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Item name
    #[arg(value_name = "ITEM")]
    pub item: String,

    /// Quantity to add (negative values take stock away)
    #[arg(value_name = "QTY", allow_negative_numbers = true)]
    pub qty: i64,
}

/// Arguments for the `remove` command
#[derive(Args)]
pub struct RemoveArgs {
    /// Item name
    #[arg(value_name = "ITEM")]
    pub item: String,

    /// Quantity to remove
    #[arg(value_name = "QTY", allow_negative_numbers = true)]
    pub qty: i64,
}

/// Arguments for the `get` command
#[derive(Args)]
pub struct GetArgs {
    /// Item name
    #[arg(value_name = "ITEM")]
    pub item: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `low` command
#[derive(Args)]
pub struct LowArgs {
    /// Report items strictly below this quantity
    #[arg(short, long, allow_negative_numbers = true)]
    pub threshold: Option<i64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `report` command
#[derive(Args, Default)]
pub struct ReportArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add stock for an item
    Add(AddArgs),

    /// Remove stock for an item
    Remove(RemoveArgs),

    /// Show the quantity on hand for an item
    Get(GetArgs),

    /// List items below the low-stock threshold
    Low(LowArgs),

    /// Print the inventory report
    Report(ReportArgs),

    /// Run the demonstration scenario against the inventory file
    Demo,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

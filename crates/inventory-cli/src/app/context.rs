//! Application context for the Inventory CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use inventory_core::{InventoryLedger, LoadOutcome};

use crate::cli::Cli;
use crate::config::{read_config, InventoryConfig};
use crate::errors::CliError;

use super::resolver::{resolve_config_path, resolve_inventory_path};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<InventoryConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    ///
    /// A missing config file yields the defaults.
    pub fn config(&self) -> anyhow::Result<&InventoryConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if path.exists() {
                read_config(&path)
            } else {
                Ok(InventoryConfig::default())
            }
        })
    }

    /// Path of the inventory file this invocation works on.
    pub fn inventory_path(&self) -> anyhow::Result<PathBuf> {
        Ok(resolve_inventory_path(self.cli, self.config()?))
    }

    /// Low-stock threshold: explicit value, then config.
    pub fn low_stock_threshold(&self, explicit: Option<i64>) -> anyhow::Result<i64> {
        match explicit {
            Some(value) => Ok(value),
            None => Ok(self.config()?.report.low_stock_threshold),
        }
    }

    /// Load the inventory file into a fresh ledger.
    ///
    /// A missing file gives an empty ledger. A file that exists but cannot
    /// be used is an error, so commands never overwrite it with a blank
    /// inventory.
    pub fn open_ledger(&self) -> anyhow::Result<(InventoryLedger, PathBuf)> {
        let path = self.inventory_path()?;
        let mut ledger = InventoryLedger::new();
        match ledger.load(&path) {
            LoadOutcome::Loaded { .. } | LoadOutcome::Missing => Ok((ledger, path)),
            LoadOutcome::Malformed => Err(CliError::invalid_input(
                format!("Inventory file {} is not valid", path.display()),
                "Hint: Fix or move the file; it must be a JSON object of item -> integer.",
            )
            .into()),
            LoadOutcome::Unreadable => Err(anyhow::anyhow!(
                "Inventory file {} could not be read",
                path.display()
            )),
        }
    }
}

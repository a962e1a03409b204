//! Path resolution for config and inventory files.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, InventoryConfig};
use crate::constants::CONFIG_ENV;

/// Resolve the config file path, checking INVENTORY_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the inventory file path: `--file`/`INVENTORY_PATH`, then config.
pub fn resolve_inventory_path(cli: &Cli, config: &InventoryConfig) -> PathBuf {
    match cli.file.as_deref() {
        Some(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(&config.inventory.path),
    }
}

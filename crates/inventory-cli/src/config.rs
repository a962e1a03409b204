use std::path::{Path, PathBuf};

use inventory_core::{DEFAULT_INVENTORY_PATH, DEFAULT_LOW_STOCK_THRESHOLD};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryConfig {
    #[serde(default)]
    pub inventory: InventorySection,
    #[serde(default)]
    pub report: ReportSection,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventorySection {
    pub path: String,
}

impl Default for InventorySection {
    fn default() -> Self {
        Self {
            path: DEFAULT_INVENTORY_PATH.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSection {
    pub low_stock_threshold: i64,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<InventoryConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("inventory"));
        }
    }
    Ok(home_dir()?.join(".config").join("inventory"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

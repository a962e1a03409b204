//! JSON file storage backend.
//!
//! The on-disk format is a single JSON object mapping item names to integer
//! quantities, indented with two spaces:
//!
//! ```text
//! {
//!   "apple": 7,
//!   "banana": 5
//! }
//! ```

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{InventoryError, Result};
use crate::quantities::Quantities;
use crate::storage::traits::StockStore;

/// Default inventory file, relative to the working directory.
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";

/// Inventory stored as a pretty-printed JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(quantities: &Quantities) -> Result<Vec<u8>> {
        let mut bytes = serde_json::to_vec_pretty(quantities)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_INVENTORY_PATH)
    }
}

impl StockStore for JsonFileStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<Option<Quantities>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let quantities = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(quantities))
    }

    fn write(&self, quantities: &Quantities) -> Result<()> {
        let bytes = Self::encode(quantities)?;
        crate::fs::write_atomic(&self.path, &bytes)
            .map_err(|e| InventoryError::Storage(e.to_string()))
    }
}

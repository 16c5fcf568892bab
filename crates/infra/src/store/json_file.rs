use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use stockroom_inventory::Inventory;

use super::r#trait::{InventorySnapshot, InventoryStore, StoreError};

/// File-backed store: one pretty-printed JSON document per inventory.
///
/// ```json
/// {
///   "items": [
///     { "name": "apple", "quantity": 7, "unit_price": 50 }
///   ]
/// }
/// ```
///
/// Prices are in cents. Saves go to a sibling `.tmp` file which is then
/// renamed over the target, so a crash mid-write leaves the old file intact.
///
/// Files in the older flat `{"apple": 7}` name-to-quantity layout carry no
/// prices and are rejected with `StoreError::Deserialize`; convert each entry
/// to `{"name": "apple", "quantity": 7, "unit_price": 0}` under `items`.
#[derive(Debug, Clone)]
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

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl InventoryStore for JsonFileStore {
    fn load(&self) -> Result<Inventory, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    path = %self.path.display(),
                    "inventory file not found; starting with empty inventory"
                );
                return Ok(Inventory::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let snapshot: InventorySnapshot =
            serde_json::from_str(&raw).map_err(|source| StoreError::Deserialize {
                path: self.path.clone(),
                source,
            })?;
        let inventory = snapshot.restore()?;

        tracing::info!(
            path = %self.path.display(),
            items = inventory.len(),
            "inventory loaded"
        );
        Ok(inventory)
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        let snapshot = InventorySnapshot::capture(inventory);
        let mut body = serde_json::to_string_pretty(&snapshot).map_err(StoreError::Serialize)?;
        body.push('\n');

        let temp = self.temp_path();
        fs::write(&temp, body).map_err(|e| self.io_error(e))?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            if let Err(cleanup) = fs::remove_file(&temp) {
                tracing::warn!(path = %temp.display(), error = %cleanup, "failed to remove temp file");
            }
            return Err(self.io_error(e));
        }

        tracing::info!(
            path = %self.path.display(),
            items = snapshot.items.len(),
            "inventory saved"
        );
        Ok(())
    }
}

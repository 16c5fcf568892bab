use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockroom_core::DomainError;
use stockroom_inventory::{Inventory, InventoryItem};

/// Persisted form of an inventory: its items, sorted by name.
///
/// Event history is not persisted; a loaded inventory starts with an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub items: Vec<InventoryItem>,
}

impl InventorySnapshot {
    pub fn capture(inventory: &Inventory) -> Self {
        Self {
            items: inventory.list_items(),
        }
    }

    /// Rebuild the inventory, re-validating every stored record.
    pub fn restore(self) -> Result<Inventory, StoreError> {
        Ok(Inventory::from_items(self.items)?)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize inventory: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("stored inventory is invalid: {0}")]
    Domain(#[from] DomainError),

    #[error("lock poisoned: {0}")]
    Poisoned(String),
}

/// Load/save boundary for the inventory.
pub trait InventoryStore {
    /// Load the stored inventory. A store with nothing saved yields an empty one.
    fn load(&self) -> Result<Inventory, StoreError>;

    fn save(&self, inventory: &Inventory) -> Result<(), StoreError>;
}

use std::sync::RwLock;

use stockroom_inventory::Inventory;

use super::r#trait::{InventorySnapshot, InventoryStore, StoreError};

/// In-memory store holding the last saved snapshot.
///
/// Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: RwLock<Option<InventorySnapshot>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: InventorySnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Some(snapshot)),
        }
    }

    /// The last saved snapshot, if any.
    pub fn snapshot(&self) -> Result<Option<InventorySnapshot>, StoreError> {
        let guard = self
            .snapshot
            .read()
            .map_err(|_| StoreError::Poisoned("in-memory snapshot".to_string()))?;
        Ok(guard.clone())
    }
}

impl InventoryStore for InMemoryStore {
    fn load(&self) -> Result<Inventory, StoreError> {
        match self.snapshot()? {
            Some(snapshot) => snapshot.restore(),
            None => Ok(Inventory::new()),
        }
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        let mut guard = self
            .snapshot
            .write()
            .map_err(|_| StoreError::Poisoned("in-memory snapshot".to_string()))?;
        *guard = Some(InventorySnapshot::capture(inventory));
        Ok(())
    }
}

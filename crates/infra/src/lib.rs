//! Infrastructure layer: persistence adapters for the inventory.

pub mod store;

pub use store::{InMemoryStore, InventorySnapshot, InventoryStore, JsonFileStore, StoreError};

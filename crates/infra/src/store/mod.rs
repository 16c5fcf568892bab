//! Inventory persistence boundary.
//!
//! The domain never touches storage; callers load an `Inventory` through an
//! `InventoryStore`, run commands against it, and save it back.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;
pub use r#trait::{InventorySnapshot, InventoryStore, StoreError};

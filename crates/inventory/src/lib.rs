//! Inventory domain module.
//!
//! Business rules for tracked stock, implemented as deterministic domain
//! logic (no IO, no storage). Every change goes through a command that is
//! validated before any state is touched.

pub mod inventory;
pub mod item;

pub use inventory::{
    AddStock, DeleteItem, Inventory, InventoryCommand, InventoryEvent, ItemDeleted, QuantitySet,
    RemoveStock, SetQuantity, StockAdded, StockRemoved, DEFAULT_LOW_STOCK_THRESHOLD,
};
pub use item::InventoryItem;

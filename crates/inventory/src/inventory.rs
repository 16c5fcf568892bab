use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{Aggregate, DomainError, DomainResult, Money};

use crate::item::{InventoryItem, validate_name};

/// Threshold used by reports when none is given: items below 5 units are "low".
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Command: AddStock.
///
/// Inserts the item or increments its quantity. `unit_price` is in cents and
/// replaces the price of an existing item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddStock {
    pub name: String,
    pub quantity: i64,
    pub unit_price: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveStock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveStock {
    pub name: String,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: SetQuantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetQuantity {
    pub name: String,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: DeleteItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteItem {
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryCommand {
    AddStock(AddStock),
    RemoveStock(RemoveStock),
    SetQuantity(SetQuantity),
    DeleteItem(DeleteItem),
}

/// Event: StockAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdded {
    pub name: String,
    pub quantity: u64,
    pub unit_price: Money,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRemoved {
    pub name: String,
    pub quantity: u64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: QuantitySet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantitySet {
    pub name: String,
    pub quantity: u64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemDeleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDeleted {
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InventoryEvent {
    StockAdded(StockAdded),
    StockRemoved(StockRemoved),
    QuantitySet(QuantitySet),
    ItemDeleted(ItemDeleted),
}

impl InventoryEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::StockAdded(_) => "inventory.stock_added",
            InventoryEvent::StockRemoved(_) => "inventory.stock_removed",
            InventoryEvent::QuantitySet(_) => "inventory.quantity_set",
            InventoryEvent::ItemDeleted(_) => "inventory.item_deleted",
        }
    }

    pub fn item_name(&self) -> &str {
        match self {
            InventoryEvent::StockAdded(e) => &e.name,
            InventoryEvent::StockRemoved(e) => &e.name,
            InventoryEvent::QuantitySet(e) => &e.name,
            InventoryEvent::ItemDeleted(e) => &e.name,
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::StockAdded(e) => e.occurred_at,
            InventoryEvent::StockRemoved(e) => e.occurred_at,
            InventoryEvent::QuantitySet(e) => e.occurred_at,
            InventoryEvent::ItemDeleted(e) => e.occurred_at,
        }
    }
}

/// Aggregate: the whole inventory, keyed by item name.
///
/// Listings come back sorted by name. `history` holds every event applied
/// since the inventory was created or rebuilt from storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: BTreeMap<String, InventoryItem>,
    history: Vec<InventoryEvent>,
}

impl Aggregate for Inventory {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::StockAdded(e) => {
                let item = self
                    .items
                    .entry(e.name.clone())
                    .or_insert_with(|| InventoryItem::unchecked(e.name.clone()));
                item.set_quantity(item.quantity().saturating_add(e.quantity));
                item.set_unit_price(e.unit_price);
            }
            InventoryEvent::StockRemoved(e) => {
                if let Some(item) = self.items.get_mut(&e.name) {
                    item.set_quantity(item.quantity().saturating_sub(e.quantity));
                }
            }
            InventoryEvent::QuantitySet(e) => {
                if let Some(item) = self.items.get_mut(&e.name) {
                    item.set_quantity(e.quantity);
                }
            }
            InventoryEvent::ItemDeleted(e) => {
                self.items.remove(&e.name);
            }
        }

        self.history.push(event.clone());
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::AddStock(cmd) => self.handle_add(cmd),
            InventoryCommand::RemoveStock(cmd) => self.handle_remove(cmd),
            InventoryCommand::SetQuantity(cmd) => self.handle_set(cmd),
            InventoryCommand::DeleteItem(cmd) => self.handle_delete(cmd),
        }
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild an inventory from stored records.
    ///
    /// Every record is re-validated; a repeated name means the stored state is
    /// corrupt and is reported as an invariant violation.
    pub fn from_items(items: impl IntoIterator<Item = InventoryItem>) -> DomainResult<Self> {
        let mut map = BTreeMap::new();
        for item in items {
            validate_name(item.name())?;
            if map.contains_key(item.name()) {
                return Err(DomainError::invariant(format!(
                    "duplicate item name: {}",
                    item.name()
                )));
            }
            map.insert(item.name().to_string(), item);
        }
        Ok(Self {
            items: map,
            history: Vec::new(),
        })
    }

    /// Add `quantity` units of `name` at `unit_price` cents each.
    pub fn add(&mut self, name: &str, quantity: i64, unit_price: i64) -> DomainResult<()> {
        self.dispatch(InventoryCommand::AddStock(AddStock {
            name: name.to_string(),
            quantity,
            unit_price,
            occurred_at: Utc::now(),
        }))
    }

    /// Remove `quantity` units of `name`; the item disappears when none are left.
    pub fn remove(&mut self, name: &str, quantity: i64) -> DomainResult<()> {
        self.dispatch(InventoryCommand::RemoveStock(RemoveStock {
            name: name.to_string(),
            quantity,
            occurred_at: Utc::now(),
        }))
    }

    /// Overwrite the quantity of an existing item. Zero deletes it.
    pub fn update_quantity(&mut self, name: &str, quantity: i64) -> DomainResult<()> {
        self.dispatch(InventoryCommand::SetQuantity(SetQuantity {
            name: name.to_string(),
            quantity,
            occurred_at: Utc::now(),
        }))
    }

    /// Drop an item regardless of its quantity.
    pub fn delete(&mut self, name: &str) -> DomainResult<()> {
        self.dispatch(InventoryCommand::DeleteItem(DeleteItem {
            name: name.to_string(),
            occurred_at: Utc::now(),
        }))
    }

    pub fn get(&self, name: &str) -> Option<&InventoryItem> {
        self.items.get(name)
    }

    pub fn quantity_of(&self, name: &str) -> DomainResult<u64> {
        self.items
            .get(name)
            .map(InventoryItem::quantity)
            .ok_or_else(|| DomainError::not_found(name))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot of the current items, sorted by name.
    pub fn list_items(&self) -> Vec<InventoryItem> {
        self.items.values().cloned().collect()
    }

    pub fn total_value(&self) -> Money {
        self.items.values().map(InventoryItem::value).sum()
    }

    /// Names of items holding fewer than `threshold` units.
    pub fn low_stock(&self, threshold: i64) -> DomainResult<Vec<String>> {
        let threshold = u64::try_from(threshold).map_err(|_| {
            DomainError::validation(format!("threshold must be non-negative (got {threshold})"))
        })?;
        Ok(self
            .items
            .values()
            .filter(|item| item.quantity() < threshold)
            .map(|item| item.name().to_string())
            .collect())
    }

    pub fn history(&self) -> &[InventoryEvent] {
        &self.history
    }

    fn dispatch(&mut self, command: InventoryCommand) -> DomainResult<()> {
        match self.execute(&command) {
            Ok(events) => {
                for event in &events {
                    log_event(event);
                }
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, command = ?command, "inventory command rejected");
                Err(err)
            }
        }
    }

    fn existing(&self, name: &str) -> DomainResult<&InventoryItem> {
        self.items
            .get(name)
            .ok_or_else(|| DomainError::not_found(name))
    }

    fn handle_add(&self, cmd: &AddStock) -> DomainResult<Vec<InventoryEvent>> {
        validate_name(&cmd.name)?;
        let quantity = non_negative_quantity(cmd.quantity)?;
        let unit_price = Money::try_from_cents(cmd.unit_price)?;

        let held = self.items.get(&cmd.name).map_or(0, InventoryItem::quantity);
        if held.checked_add(quantity).is_none() {
            return Err(DomainError::validation("quantity would overflow"));
        }

        Ok(vec![InventoryEvent::StockAdded(StockAdded {
            name: cmd.name.clone(),
            quantity,
            unit_price,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove(&self, cmd: &RemoveStock) -> DomainResult<Vec<InventoryEvent>> {
        if cmd.quantity <= 0 {
            return Err(DomainError::validation(format!(
                "quantity to remove must be positive (got {})",
                cmd.quantity
            )));
        }
        let quantity = cmd.quantity as u64;
        let held = self.existing(&cmd.name)?.quantity();

        if quantity > held {
            return Err(DomainError::validation(format!(
                "cannot remove {quantity} of {}: only {held} in stock",
                cmd.name
            )));
        }

        let mut events = vec![InventoryEvent::StockRemoved(StockRemoved {
            name: cmd.name.clone(),
            quantity,
            occurred_at: cmd.occurred_at,
        })];
        if quantity == held {
            events.push(InventoryEvent::ItemDeleted(ItemDeleted {
                name: cmd.name.clone(),
                occurred_at: cmd.occurred_at,
            }));
        }
        Ok(events)
    }

    fn handle_set(&self, cmd: &SetQuantity) -> DomainResult<Vec<InventoryEvent>> {
        let quantity = non_negative_quantity(cmd.quantity)?;
        self.existing(&cmd.name)?;

        let mut events = vec![InventoryEvent::QuantitySet(QuantitySet {
            name: cmd.name.clone(),
            quantity,
            occurred_at: cmd.occurred_at,
        })];
        if quantity == 0 {
            events.push(InventoryEvent::ItemDeleted(ItemDeleted {
                name: cmd.name.clone(),
                occurred_at: cmd.occurred_at,
            }));
        }
        Ok(events)
    }

    fn handle_delete(&self, cmd: &DeleteItem) -> DomainResult<Vec<InventoryEvent>> {
        self.existing(&cmd.name)?;
        Ok(vec![InventoryEvent::ItemDeleted(ItemDeleted {
            name: cmd.name.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }
}

fn non_negative_quantity(quantity: i64) -> DomainResult<u64> {
    u64::try_from(quantity).map_err(|_| {
        DomainError::validation(format!("quantity must be non-negative (got {quantity})"))
    })
}

fn log_event(event: &InventoryEvent) {
    match event {
        InventoryEvent::StockAdded(e) => tracing::info!(
            item = %e.name,
            quantity = e.quantity,
            unit_price = %e.unit_price,
            "stock added"
        ),
        InventoryEvent::StockRemoved(e) => {
            tracing::info!(item = %e.name, quantity = e.quantity, "stock removed")
        }
        InventoryEvent::QuantitySet(e) => {
            tracing::info!(item = %e.name, quantity = e.quantity, "quantity set")
        }
        InventoryEvent::ItemDeleted(e) => tracing::info!(item = %e.name, "item deleted"),
    }
}

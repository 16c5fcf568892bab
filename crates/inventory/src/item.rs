use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Money};

/// A named stock record: how many units are held and what one unit costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    name: String,
    quantity: u64,
    unit_price: Money,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, quantity: u64, unit_price: Money) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            quantity,
            unit_price,
        })
    }

    /// Empty record for a name the caller has already validated.
    pub(crate) fn unchecked(name: String) -> Self {
        Self {
            name,
            quantity: 0,
            unit_price: Money::ZERO,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// quantity × unit price.
    pub fn value(&self) -> Money {
        self.unit_price.times(self.quantity)
    }

    pub(crate) fn set_quantity(&mut self, quantity: u64) {
        self.quantity = quantity;
    }

    pub(crate) fn set_unit_price(&mut self, unit_price: Money) {
        self.unit_price = unit_price;
    }
}

/// Item names are the inventory key and must contain something besides whitespace.
pub(crate) fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_quantity_times_price() {
        let item = InventoryItem::new("apple", 3, Money::from_cents(200)).unwrap();
        assert_eq!(item.value(), Money::from_cents(600));
    }

    #[test]
    fn blank_names_are_rejected() {
        for name in ["", "   ", "\t"] {
            let err = InventoryItem::new(name, 1, Money::ZERO).unwrap_err();
            assert!(err.is_validation());
        }
    }

    #[test]
    fn serializes_with_price_in_cents() {
        let item = InventoryItem::new("banana", 2, Money::from_cents(25)).unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "banana", "quantity": 2, "unit_price": 25})
        );
    }
}

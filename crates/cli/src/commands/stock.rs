//! Mutating commands: `add`, `remove`, `set`, `delete`.

use stockroom_core::DomainError;
use stockroom_inventory::Inventory;

use crate::cli::{AddArgs, NameArgs, RemoveArgs, SetArgs};
use crate::error::CliError;
use crate::output::{ItemStatus, OutputWriter};

pub fn add(args: AddArgs, inventory: &mut Inventory, writer: &OutputWriter) -> Result<(), CliError> {
    let unit_price = i64::try_from(args.price.cents())
        .map_err(|_| DomainError::validation(format!("price too large: {}", args.price)))?;
    inventory.add(&args.name, args.quantity, unit_price)?;
    render_status(args.name, inventory, writer)
}

pub fn remove(
    args: RemoveArgs,
    inventory: &mut Inventory,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    inventory.remove(&args.name, args.quantity)?;
    render_status(args.name, inventory, writer)
}

pub fn set(args: SetArgs, inventory: &mut Inventory, writer: &OutputWriter) -> Result<(), CliError> {
    inventory.update_quantity(&args.name, args.quantity)?;
    render_status(args.name, inventory, writer)
}

pub fn delete(
    args: NameArgs,
    inventory: &mut Inventory,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    inventory.delete(&args.name)?;
    render_status(args.name, inventory, writer)
}

fn render_status(name: String, inventory: &Inventory, writer: &OutputWriter) -> Result<(), CliError> {
    let item = inventory.get(&name).cloned();
    writer.render(&ItemStatus { name, item })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::Money;

    use crate::cli::OutputFormat;

    fn writer() -> OutputWriter {
        OutputWriter::new(OutputFormat::Text)
    }

    #[test]
    fn add_passes_price_in_cents() {
        let mut inventory = Inventory::new();
        add(
            AddArgs {
                name: "apple".to_string(),
                quantity: 4,
                price: Money::from_cents(125),
            },
            &mut inventory,
            &writer(),
        )
        .unwrap();

        assert_eq!(inventory.total_value(), Money::from_cents(500));
    }

    #[test]
    fn oversized_price_is_a_validation_error() {
        let mut inventory = Inventory::new();
        let err = add(
            AddArgs {
                name: "apple".to_string(),
                quantity: 1,
                price: Money::from_cents(u64::MAX),
            },
            &mut inventory,
            &writer(),
        )
        .unwrap_err();

        assert_eq!(err.exit_code(), 3);
        assert!(inventory.is_empty());
    }

    #[test]
    fn set_to_zero_drops_the_item() {
        let mut inventory = Inventory::new();
        inventory.add("apple", 4, 10).unwrap();
        set(
            SetArgs {
                name: "apple".to_string(),
                quantity: 0,
            },
            &mut inventory,
            &writer(),
        )
        .unwrap();

        assert!(inventory.is_empty());
    }
}

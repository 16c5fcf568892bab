//! Read-only commands: `get`, `list`, `total`, `low`, `report`.

use stockroom_core::DomainError;
use stockroom_inventory::Inventory;

use crate::cli::{LowArgs, NameArgs};
use crate::error::CliError;
use crate::output::{ItemList, ItemStatus, LowStock, OutputWriter, Report, TotalValue};

pub fn get(args: NameArgs, inventory: &Inventory, writer: &OutputWriter) -> Result<(), CliError> {
    let item = inventory
        .get(&args.name)
        .cloned()
        .ok_or_else(|| DomainError::not_found(&args.name))?;
    writer.render(&ItemStatus {
        name: args.name,
        item: Some(item),
    })
}

pub fn list(inventory: &Inventory, writer: &OutputWriter) -> Result<(), CliError> {
    writer.render(&item_list(inventory))
}

pub fn total(inventory: &Inventory, writer: &OutputWriter) -> Result<(), CliError> {
    writer.render(&total_value(inventory))
}

pub fn low(args: LowArgs, inventory: &Inventory, writer: &OutputWriter) -> Result<(), CliError> {
    writer.render(&low_stock(inventory, args.threshold)?)
}

pub fn report(args: LowArgs, inventory: &Inventory, writer: &OutputWriter) -> Result<(), CliError> {
    writer.render(&build_report(inventory, args.threshold)?)
}

pub(crate) fn build_report(inventory: &Inventory, threshold: i64) -> Result<Report, DomainError> {
    Ok(Report {
        items: item_list(inventory),
        total: total_value(inventory),
        low_stock: low_stock(inventory, threshold)?,
    })
}

fn item_list(inventory: &Inventory) -> ItemList {
    ItemList {
        items: inventory.list_items(),
    }
}

fn total_value(inventory: &Inventory) -> TotalValue {
    TotalValue {
        item_count: inventory.len(),
        total_value: inventory.total_value(),
    }
}

pub(crate) fn low_stock(inventory: &Inventory, threshold: i64) -> Result<LowStock, DomainError> {
    Ok(LowStock {
        threshold,
        items: inventory.low_stock(threshold)?,
    })
}

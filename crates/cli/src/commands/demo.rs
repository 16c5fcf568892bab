//! `stockroom demo` -- a short fixed sequence of operations.
//!
//! Failures inside the sequence are logged and do not abort the command, so
//! whatever succeeded is still saved.

use std::io::Write;

use serde::Serialize;

use stockroom_core::DomainResult;
use stockroom_inventory::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory};

use crate::commands::query::low_stock;
use crate::error::CliError;
use crate::output::{LowStock, OutputWriter, Render};

#[derive(Debug, Serialize)]
pub struct DemoSummary {
    pub apple_quantity: Option<u64>,
    pub low_stock: Option<LowStock>,
}

impl Render for DemoSummary {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        match self.apple_quantity {
            Some(quantity) => writeln!(w, "Apple stock: {quantity}")?,
            None => writeln!(w, "Apple stock: unavailable")?,
        }
        match &self.low_stock {
            Some(low) => low.render_text(w),
            None => Ok(()),
        }
    }
}

pub fn execute(inventory: &mut Inventory, writer: &OutputWriter) -> Result<(), CliError> {
    let summary = match run(inventory) {
        Ok(summary) => summary,
        Err(err) => {
            tracing::error!(error = %err, "demo operations failed");
            DemoSummary {
                apple_quantity: inventory.quantity_of("apple").ok(),
                low_stock: None,
            }
        }
    };
    writer.render(&summary)
}

fn run(inventory: &mut Inventory) -> DomainResult<DemoSummary> {
    inventory.add("apple", 10, 50)?;
    inventory.add("banana", 2, 25)?;
    inventory.remove("apple", 3)?;

    let apple_quantity = inventory.quantity_of("apple")?;
    tracing::info!(quantity = apple_quantity, "apple stock");

    let low = low_stock(inventory, DEFAULT_LOW_STOCK_THRESHOLD)?;
    tracing::info!(items = ?low.items, "low stock items");

    Ok(DemoSummary {
        apple_quantity: Some(apple_quantity),
        low_stock: Some(low),
    })
}

//! Output formatting for text vs JSON rendering.
//!
//! Command handlers build a payload and hand it to [`OutputWriter`], which
//! picks the format. Payloads implement both `Serialize` and [`Render`].

use std::io::Write;

use serde::Serialize;

use stockroom_core::Money;
use stockroom_inventory::InventoryItem;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render a payload to stdout.
    pub fn render<T: Render + Serialize>(&self, payload: &T) -> Result<(), CliError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.render_to(payload, &mut handle)
    }

    pub fn render_to<T: Render + Serialize>(
        &self,
        payload: &T,
        w: &mut dyn Write,
    ) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Text => payload.render_text(w)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *w, payload)?;
                writeln!(w)?;
            }
        }
        Ok(())
    }
}

/// Human-readable text rendering.
pub trait Render {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()>;
}

/// All items, one line each.
#[derive(Debug, Serialize)]
pub struct ItemList {
    pub items: Vec<InventoryItem>,
}

impl Render for ItemList {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        if self.items.is_empty() {
            return writeln!(w, "(no items)");
        }
        writeln!(w, "{:<20} {:>8} {:>10} {:>12}", "ITEM", "QTY", "PRICE", "VALUE")?;
        for item in &self.items {
            writeln!(
                w,
                "{:<20} {:>8} {:>10} {:>12}",
                item.name(),
                item.quantity(),
                item.unit_price(),
                item.value()
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct TotalValue {
    pub item_count: usize,
    pub total_value: Money,
}

impl Render for TotalValue {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w, "Total value: {} ({} items)", self.total_value, self.item_count)
    }
}

#[derive(Debug, Serialize)]
pub struct LowStock {
    pub threshold: i64,
    pub items: Vec<String>,
}

impl Render for LowStock {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        if self.items.is_empty() {
            writeln!(w, "No items below {}", self.threshold)
        } else {
            writeln!(w, "Below {}: {}", self.threshold, self.items.join(", "))
        }
    }
}

/// State of one item after a command. `item` is `None` once it has been removed.
#[derive(Debug, Serialize)]
pub struct ItemStatus {
    pub name: String,
    pub item: Option<InventoryItem>,
}

impl Render for ItemStatus {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        match &self.item {
            Some(item) => writeln!(
                w,
                "{}: {} @ {} = {}",
                item.name(),
                item.quantity(),
                item.unit_price(),
                item.value()
            ),
            None => writeln!(w, "{}: not in stock", self.name),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub items: ItemList,
    #[serde(flatten)]
    pub total: TotalValue,
    pub low_stock: LowStock,
}

impl Render for Report {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w, "Items Report:")?;
        self.items.render_text(w)?;
        self.total.render_text(w)?;
        self.low_stock.render_text(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: u64, cents: u64) -> InventoryItem {
        InventoryItem::new(name, quantity, Money::from_cents(cents)).unwrap()
    }

    fn render(payload: &(impl Render + Serialize), format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        OutputWriter::new(format).render_to(payload, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn item_list_text_has_header_and_rows() {
        let list = ItemList {
            items: vec![item("apple", 3, 200), item("pear", 1, 500)],
        };
        let out = render(&list, OutputFormat::Text);
        assert!(out.starts_with("ITEM"));
        assert!(out.contains("apple"));
        assert!(out.contains("6.00"));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn empty_list_says_so() {
        let out = render(&ItemList { items: vec![] }, OutputFormat::Text);
        assert_eq!(out.trim(), "(no items)");
    }

    #[test]
    fn total_value_json_is_in_cents() {
        let total = TotalValue {
            item_count: 2,
            total_value: Money::from_cents(1100),
        };
        let json: serde_json::Value =
            serde_json::from_str(&render(&total, OutputFormat::Json)).unwrap();
        assert_eq!(json["total_value"], 1100);
        assert_eq!(json["item_count"], 2);
    }

    #[test]
    fn removed_item_status_text() {
        let status = ItemStatus {
            name: "apple".to_string(),
            item: None,
        };
        assert_eq!(render(&status, OutputFormat::Text).trim(), "apple: not in stock");
    }

    #[test]
    fn report_json_flattens_sections() {
        let report = Report {
            items: ItemList {
                items: vec![item("banana", 2, 25)],
            },
            total: TotalValue {
                item_count: 1,
                total_value: Money::from_cents(50),
            },
            low_stock: LowStock {
                threshold: 5,
                items: vec!["banana".to_string()],
            },
        };
        let json: serde_json::Value =
            serde_json::from_str(&render(&report, OutputFormat::Json)).unwrap();
        assert_eq!(json["items"][0]["name"], "banana");
        assert_eq!(json["total_value"], 50);
        assert_eq!(json["low_stock"]["items"][0], "banana");
    }
}

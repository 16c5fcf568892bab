//! CLI argument parsing using clap derive API.
//!
//! Purely declarative; no side effects or I/O.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use stockroom_core::Money;
use stockroom_inventory::DEFAULT_LOW_STOCK_THRESHOLD;
use stockroom_observability::LogFormat;

/// Stockroom -- track item quantities and prices in a JSON file.
///
/// Runs the demo sequence when no subcommand is given.
#[derive(Parser, Debug)]
#[command(name = "stockroom", version, about, long_about = None)]
pub struct Cli {
    /// Inventory file to load and save.
    #[arg(short, long, env = "STOCKROOM_FILE", default_value = "inventory.json", global = true)]
    pub file: PathBuf,

    /// Log filter used when RUST_LOG is unset (trace, debug, info, warn, error).
    #[arg(long, env = "STOCKROOM_LOG", default_value = "info", global = true)]
    pub log_level: String,

    /// Log line format.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormatArg,

    /// Output format.
    #[arg(long, default_value = "text", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load, run a short sample sequence of operations, and save.
    Demo,

    /// Add units of an item (creates it if missing).
    Add(AddArgs),

    /// Remove units of an item; the item is dropped when none are left.
    Remove(RemoveArgs),

    /// Set the quantity of an existing item.
    Set(SetArgs),

    /// Delete an item regardless of quantity.
    Delete(NameArgs),

    /// Show the quantity of one item.
    Get(NameArgs),

    /// List all items.
    List,

    /// Show the total inventory value.
    Total,

    /// List items below a stock threshold.
    Low(LowArgs),

    /// Items, total value and low-stock items in one report.
    Report(LowArgs),
}

impl Commands {
    /// Whether the command changes the inventory and must be saved afterwards.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Commands::Demo
                | Commands::Add(_)
                | Commands::Remove(_)
                | Commands::Set(_)
                | Commands::Delete(_)
        )
    }
}

#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct AddArgs {
    /// Item name.
    pub name: String,

    /// Units to add.
    pub quantity: i64,

    /// Unit price, e.g. 2 or 2.50.
    #[arg(short, long)]
    pub price: Money,
}

#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct RemoveArgs {
    pub name: String,

    /// Units to remove.
    pub quantity: i64,
}

#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct SetArgs {
    pub name: String,

    /// New quantity; 0 deletes the item.
    pub quantity: i64,
}

#[derive(Args, Debug)]
pub struct NameArgs {
    pub name: String,
}

#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct LowArgs {
    /// Items with fewer units than this are reported.
    #[arg(short, long, default_value_t = DEFAULT_LOW_STOCK_THRESHOLD)]
    pub threshold: i64,
}

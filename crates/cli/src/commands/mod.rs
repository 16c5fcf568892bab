//! Command handlers -- load, run one subcommand, save when it changed anything.

pub mod demo;
pub mod query;
pub mod stock;

use stockroom_infra::InventoryStore;

use crate::cli::Commands;
use crate::error::CliError;
use crate::output::OutputWriter;

/// Run `command` against the inventory held by `store`.
///
/// Mutating commands save only when they succeed.
pub fn execute(
    command: Commands,
    store: &dyn InventoryStore,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let mut inventory = store.load()?;
    let mutates = command.mutates();

    match command {
        Commands::Demo => demo::execute(&mut inventory, writer)?,
        Commands::Add(args) => stock::add(args, &mut inventory, writer)?,
        Commands::Remove(args) => stock::remove(args, &mut inventory, writer)?,
        Commands::Set(args) => stock::set(args, &mut inventory, writer)?,
        Commands::Delete(args) => stock::delete(args, &mut inventory, writer)?,
        Commands::Get(args) => query::get(args, &inventory, writer)?,
        Commands::List => query::list(&inventory, writer)?,
        Commands::Total => query::total(&inventory, writer)?,
        Commands::Low(args) => query::low(args, &inventory, writer)?,
        Commands::Report(args) => query::report(args, &inventory, writer)?,
    }

    if mutates {
        store.save(&inventory)?;
    }
    Ok(())
}

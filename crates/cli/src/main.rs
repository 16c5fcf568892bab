//! `stockroom` binary entry point.

mod cli;
mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::Parser;

use stockroom_infra::JsonFileStore;
use stockroom_observability::LogConfig;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    stockroom_observability::init(&LogConfig {
        level: cli.log_level.clone(),
        format: cli.log_format.into(),
    });

    let store = JsonFileStore::new(&cli.file);
    let writer = OutputWriter::new(cli.output);
    let command = cli.command.unwrap_or(Commands::Demo);

    tracing::debug!(file = %cli.file.display(), ?command, "stockroom starting");

    match commands::execute(command, &store, &writer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err}");
            let code = u8::try_from(err.exit_code()).unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

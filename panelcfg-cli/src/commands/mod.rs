//! Command handler modules for the CLI.

mod copy;
mod defaults;
mod find;
mod inspect;
mod resolve;

use crate::cli::Commands;
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Resolve {
            file,
            output,
            compact,
        } => resolve::cmd_resolve(&file, output.as_deref(), compact),
        Commands::Copy { file, compact } => copy::cmd_copy(&file, compact),
        Commands::Inspect { file, format } => inspect::cmd_inspect(&file, format),
        Commands::Defaults { item, compact } => defaults::cmd_defaults(item.as_deref(), compact),
        Commands::Find { file, id } => find::cmd_find(&file, &id),
    }
}

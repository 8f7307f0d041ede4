//! `PanelCfg` CLI - Command-line interface for panel layout configurations
//!
//! Provides commands for resolving user configurations against defaults,
//! copying and inspecting resolved configurations, printing defaults and
//! looking up items by id.

mod cli;
mod commands;
mod error;
mod util;

use clap::Parser;
use cli::Cli;
use panelcfg_core::{TracingConfig, TracingLevel, init_tracing};

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        let config = TracingConfig::new().with_level(TracingLevel::from_verbosity(cli.verbose));
        if let Err(e) = init_tracing(&config) {
            eprintln!("Warning: {e}");
        }
    }

    let result = commands::dispatch(cli.command);

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}

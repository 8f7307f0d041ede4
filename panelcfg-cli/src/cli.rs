//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// `PanelCfg` command-line interface for panel layout configurations
#[derive(Parser)]
#[command(name = "panelcfg-cli")]
#[command(author, version, about = "PanelCfg command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except results
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a user configuration against the defaults
    #[command(about = "Merge a partial user configuration with the defaults")]
    Resolve {
        /// User configuration file (JSON)
        file: PathBuf,

        /// Write the resolved configuration here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Deep-copy a resolved configuration
    #[command(about = "Parse a resolved configuration and print an independent copy")]
    Copy {
        /// Resolved configuration file (root or popout)
        file: PathBuf,

        /// Print compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Summarize a resolved configuration
    #[command(about = "Print item counts, tree depth and open popouts")]
    Inspect {
        /// Resolved configuration file (root or popout)
        file: PathBuf,

        /// Output format for the summary
        #[arg(short, long, default_value = "text", value_enum)]
        format: OutputFormat,
    },

    /// Print default configurations
    #[command(about = "Print the default configuration or a default item")]
    Defaults {
        /// Print the default item of this type instead
        /// (row, column, stack, component, react-component)
        #[arg(short, long)]
        item: Option<String>,

        /// Print compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Find items by id
    #[command(about = "Print every item carrying the id, in pre-order")]
    Find {
        /// Resolved configuration file (root or popout)
        file: PathBuf,

        /// Item id to look for
        id: String,
    },
}

/// Output format for summaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON document
    Json,
}

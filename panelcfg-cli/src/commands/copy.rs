//! Deep-copy a resolved configuration command.

use std::path::Path;

use panelcfg_core::parse_manager_config;

use crate::error::CliError;
use crate::util::{read_text_file, render_json};

/// Copy command handler
pub fn cmd_copy(file: &Path, compact: bool) -> Result<(), CliError> {
    let config = parse_manager_config(&read_text_file(file)?)?;
    let copy = config.create_copy();
    println!("{}", render_json(&copy, compact)?);
    Ok(())
}

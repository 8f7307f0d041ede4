//! Resolve a user configuration command.

use std::path::Path;

use panelcfg_core::resolve_manager_config;

use crate::error::CliError;
use crate::util::{read_json_file, render_json, write_output};

/// Resolve command handler
pub fn cmd_resolve(file: &Path, output: Option<&Path>, compact: bool) -> Result<(), CliError> {
    let user = read_json_file(file)?;
    let resolved = resolve_manager_config(&user)?;

    let manager = resolved.manager();
    tracing::info!(
        file = %file.display(),
        popout = resolved.is_popout(),
        items = manager.item_count(),
        popouts = manager.popout_count(),
        "Resolved configuration"
    );

    write_output(&render_json(&resolved, compact)?, output)
}

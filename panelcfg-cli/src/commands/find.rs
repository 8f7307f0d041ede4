//! Find items by id command.

use std::path::Path;

use panelcfg_core::{ItemConfig, ManagerConfig, parse_manager_config};

use crate::error::CliError;
use crate::util::{read_text_file, render_json};

/// Find command handler
///
/// Searches the main tree first, then every popout depth-first. Each match
/// is printed as one compact JSON line prefixed with the window it lives in.
pub fn cmd_find(file: &Path, id: &str) -> Result<(), CliError> {
    let config = parse_manager_config(&read_text_file(file)?)?;

    let mut matches = Vec::new();
    collect_matches(config.manager(), "main", id, &mut matches);

    if matches.is_empty() {
        return Err(CliError::NotFound(format!("no item with id '{id}'")));
    }

    tracing::debug!(id, count = matches.len(), "Found items");
    for (window, item) in matches {
        println!("{window}\t{}", render_json(item, true)?);
    }
    Ok(())
}

fn collect_matches<'a>(
    manager: &'a ManagerConfig,
    window: &str,
    id: &str,
    matches: &mut Vec<(String, &'a ItemConfig)>,
) {
    matches.extend(
        manager
            .find_by_id(id)
            .into_iter()
            .map(|item| (window.to_string(), item)),
    );
    for (index, popout) in manager.open_popouts.iter().enumerate() {
        let name = format!("{window}/popout[{index}]");
        collect_matches(&popout.manager, &name, id, matches);
    }
}

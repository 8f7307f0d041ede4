//! Print default configurations command.

use panelcfg_core::{Config, ItemConfig, ItemType};

use crate::error::CliError;
use crate::util::render_json;

/// Defaults command handler
pub fn cmd_defaults(item: Option<&str>, compact: bool) -> Result<(), CliError> {
    let rendered = match item {
        Some(tag) => {
            let item_type: ItemType = tag.parse()?;
            render_json(&ItemConfig::create_default(item_type)?, compact)?
        }
        None => render_json(&Config::default(), compact)?,
    };
    println!("{rendered}");
    Ok(())
}

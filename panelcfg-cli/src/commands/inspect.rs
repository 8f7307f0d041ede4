//! Summarize a resolved configuration command.

use std::collections::BTreeMap;
use std::path::Path;

use panelcfg_core::{ItemConfig, ManagerConfig, ManagerConfigKind, parse_manager_config};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::util::{read_text_file, render_json};

/// Summary of one window's configuration
#[derive(Debug, Serialize)]
struct WindowSummary {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    index_in_parent: Option<usize>,
    items: usize,
    depth: usize,
    by_type: BTreeMap<String, usize>,
    popouts: Vec<WindowSummary>,
}

impl WindowSummary {
    fn from_manager(kind: &'static str, manager: &ManagerConfig) -> Self {
        let mut by_type = BTreeMap::new();
        for item in &manager.content {
            for (item_type, count) in item.count_by_type() {
                *by_type.entry(item_type.to_string()).or_insert(0) += count;
            }
        }
        Self {
            kind,
            parent_id: None,
            index_in_parent: None,
            items: manager.item_count(),
            depth: manager
                .content
                .iter()
                .map(ItemConfig::depth)
                .max()
                .unwrap_or(0),
            by_type,
            popouts: manager
                .open_popouts
                .iter()
                .map(|popout| Self {
                    parent_id: Some(popout.parent_id.clone()),
                    index_in_parent: Some(popout.index_in_parent),
                    ..Self::from_manager("popout", &popout.manager)
                })
                .collect(),
        }
    }

    fn from_kind(config: &ManagerConfigKind) -> Self {
        match config {
            ManagerConfigKind::Root(config) => Self::from_manager("root", &config.manager),
            ManagerConfigKind::Popout(popout) => Self {
                parent_id: Some(popout.parent_id.clone()),
                index_in_parent: Some(popout.index_in_parent),
                ..Self::from_manager("popout", &popout.manager)
            },
        }
    }

    fn print(&self, indent: usize) {
        let pad = "  ".repeat(indent);
        match (&self.parent_id, self.index_in_parent) {
            (Some(parent), Some(index)) => {
                println!("{pad}{} (parent: {parent}, index: {index})", self.kind);
            }
            _ => println!("{pad}{}", self.kind),
        }
        println!("{pad}  Items: {}", self.items);
        println!("{pad}  Depth: {}", self.depth);
        for (item_type, count) in &self.by_type {
            println!("{pad}    {item_type}: {count}");
        }
        if !self.popouts.is_empty() {
            println!("{pad}  Popouts: {}", self.popouts.len());
            for popout in &self.popouts {
                popout.print(indent + 2);
            }
        }
    }
}

/// Inspect command handler
pub fn cmd_inspect(file: &Path, format: OutputFormat) -> Result<(), CliError> {
    let config = parse_manager_config(&read_text_file(file)?)?;
    let summary = WindowSummary::from_kind(&config);

    match format {
        OutputFormat::Text => summary.print(0),
        OutputFormat::Json => println!("{}", render_json(&summary, false)?),
    }
    Ok(())
}

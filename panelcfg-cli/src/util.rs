//! Shared utility functions used across command modules.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::CliError;

/// Reads a file and parses it as JSON.
pub fn read_json_file(path: &Path) -> Result<Value, CliError> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::InvalidConfig(format!("{}: {e}", path.display())))
}

/// Reads a file as text.
pub fn read_text_file(path: &Path) -> Result<String, CliError> {
    Ok(std::fs::read_to_string(path)?)
}

/// Renders a value as JSON, pretty unless `compact` is set.
pub fn render_json<T: Serialize>(value: &T, compact: bool) -> Result<String, CliError> {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    rendered.map_err(|e| CliError::Output(e.to_string()))
}

/// Writes `text` to `output`, or prints it when no output file is given.
pub fn write_output(text: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, format!("{text}\n"))?;
        }
        None => println!("{text}"),
    }
    Ok(())
}

//! One module per subcommand. Each exposes a `run` taking its arguments and the
//! output format.

pub mod defaults;
pub mod kinds;
pub mod repair;
pub mod tree;

use std::path::Path;

use mathforge::{defaults::DefaultTable, input::Imported};

/// Reads a settings file and completes it from the builtin defaults.
pub(crate) fn import(path: &Path) -> Result<Imported, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {err}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    let imported = mathforge::input::parse_document(&value, &DefaultTable::builtin())?;
    tracing::debug!(
        path = %path.display(),
        kind = %imported.input.kind(),
        missing = imported.missing.len(),
        "Imported settings file"
    );
    Ok(imported)
}

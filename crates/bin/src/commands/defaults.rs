//! Defaults command - prints the canonical settings of one kind.

use mathforge::{Mode, defaults::DefaultTable};

use crate::cli::DefaultsArgs;
use crate::output::OutputFormat;

/// Run the defaults command
pub fn run(args: &DefaultsArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mode = Mode::from(args.mode);
    let settings = DefaultTable::builtin().get(args.kind, mode);

    match format {
        OutputFormat::Human => {
            println!("Kind: {}", args.kind);
            println!("Mode: {mode}");
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "kind": args.kind.as_str(),
                "mode": mode.as_str(),
                "settings": settings,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}

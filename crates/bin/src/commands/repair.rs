//! Repair command - completes a stored settings file from the defaults.

use crate::cli::FileArgs;
use crate::output::OutputFormat;

/// Run the repair command
pub fn run(args: &FileArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let imported = super::import(&args.file)?;

    match format {
        OutputFormat::Human => {
            if imported.missing.is_empty() {
                println!("Nothing filled from defaults.");
            } else {
                println!("Filled from defaults:");
                for key in &imported.missing {
                    println!("  {key}");
                }
            }
            println!("{}", serde_json::to_string_pretty(&imported.input)?);
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "missing": imported.missing,
                "input": imported.input,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}

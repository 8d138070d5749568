//! Kinds command - lists every math object kind and how it behaves on a mode switch.

use mathforge::{MathObjectKind, defaults::DefaultTable};

use crate::output::{OutputFormat, print_table};

fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}

/// Run the kinds command
pub fn run(format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let table = DefaultTable::builtin();

    match format {
        OutputFormat::Human => {
            let rows: Vec<Vec<String>> = MathObjectKind::ALL
                .iter()
                .map(|kind| {
                    vec![
                        kind.to_string(),
                        yes_no(kind.supports_mode_toggle()),
                        yes_no(table.has_complex(*kind)),
                        yes_no(kind.is_lossy_on_mode_switch()),
                    ]
                })
                .collect();
            print_table(&["KIND", "TOGGLE", "COMPLEX DEFAULT", "LOSSY SWITCH"], &rows);
        }
        OutputFormat::Json => {
            let kinds: Vec<serde_json::Value> = MathObjectKind::ALL
                .iter()
                .map(|kind| {
                    serde_json::json!({
                        "kind": kind.as_str(),
                        "toggle": kind.supports_mode_toggle(),
                        "complex_default": table.has_complex(*kind),
                        "lossy_switch": kind.is_lossy_on_mode_switch(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string(&kinds)?);
        }
    }

    Ok(())
}

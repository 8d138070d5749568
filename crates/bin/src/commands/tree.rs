//! Tree command - prints every node of a settings file with its mode.

use mathforge::{
    Document,
    render::{NodeView, Renderer, walk},
};

use crate::cli::FileArgs;
use crate::output::{OutputFormat, print_table};

#[derive(Default)]
struct Rows(Vec<Row>);

struct Row {
    container: String,
    kind: String,
    mode: String,
    toggle: bool,
    count: Option<usize>,
    depth: usize,
}

impl Renderer for Rows {
    fn node(&mut self, view: &NodeView<'_>) {
        self.0.push(Row {
            container: view.container.to_string(),
            kind: view.kind.to_string(),
            mode: view.mode.to_string(),
            toggle: view.toggle,
            count: view.controls.count.map(|count| count.value),
            depth: view.depth,
        });
    }
}

/// Run the tree command
pub fn run(args: &FileArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let imported = super::import(&args.file)?;
    let document = Document::from_input(imported.input)?;

    let mut rows = Rows::default();
    walk(&document, &mut rows);

    match format {
        OutputFormat::Human => {
            let table: Vec<Vec<String>> = rows
                .0
                .iter()
                .map(|row| {
                    vec![
                        format!("{}{}", "  ".repeat(row.depth), row.kind),
                        row.mode.clone(),
                        if row.toggle { "yes" } else { "-" }.to_string(),
                        row.count.map(|n| n.to_string()).unwrap_or_default(),
                        row.container.clone(),
                    ]
                })
                .collect();
            print_table(&["NODE", "MODE", "TOGGLE", "COUNT", "CONTAINER"], &table);
        }
        OutputFormat::Json => {
            let nodes: Vec<serde_json::Value> = rows
                .0
                .iter()
                .map(|row| {
                    serde_json::json!({
                        "container": row.container,
                        "kind": row.kind,
                        "mode": row.mode,
                        "toggle": row.toggle,
                        "count": row.count,
                        "depth": row.depth,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string(&nodes)?);
        }
    }

    Ok(())
}

//! Output formatting helpers for human-readable and JSON output.

use clap::ValueEnum;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Cells that hold only counts and flags are right-aligned.
fn is_compact(cell: &str) -> bool {
    cell.is_empty()
        || matches!(cell, "yes" | "no" | "-")
        || cell.chars().all(|c| c.is_ascii_digit())
}

/// Lays out `rows` under `headers` with aligned columns.
///
/// A column whose cells are all counts or flags (`yes`, `no`, `-`) is right-aligned.
/// Cells past the header count are dropped.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    if rows.is_empty() {
        return vec!["(nothing to show)".to_string()];
    }

    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    let mut right = vec![true; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(cell.chars().count());
            right[i] &= is_compact(cell);
        }
    }

    std::iter::once(pad_line(headers.iter().copied(), &widths, &right))
        .chain(
            rows.iter()
                .map(|row| pad_line(row.iter().map(String::as_str), &widths, &right)),
        )
        .collect()
}

fn pad_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize], right: &[bool]) -> String {
    let padded: Vec<String> = cells
        .zip(widths.iter().zip(right))
        .map(|(cell, (&width, &align_right))| {
            if align_right {
                format!("{cell:>width$}")
            } else {
                format!("{cell:<width$}")
            }
        })
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// Prints [`format_table`] to stdout.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    for line in format_table(headers, rows) {
        println!("{line}");
    }
}

//! CLI argument definitions for the Mathforge binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use mathforge::{MathObjectKind, Mode};

use crate::output::OutputFormat;

/// Interface mode argument
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Reduced editor; relations hold one expression
    Simple,
    /// Every field editable; relations hold two sides
    Complex,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Simple => Mode::Simple,
            ModeArg::Complex => Mode::Complex,
        }
    }
}

/// Mathforge math object settings tool
#[derive(Parser, Debug)]
#[command(name = "mathforge")]
#[command(about = "Mathforge: inspect, complete and repair math object settings")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", env = "MATHFORGE_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every kind with its mode support
    Kinds,
    /// Print the canonical default settings of a kind
    Defaults(DefaultsArgs),
    /// Complete a settings file from defaults and print the repaired settings
    Repair(FileArgs),
    /// Print every node of a settings file with its container path and mode
    Tree(FileArgs),
}

/// Arguments for the defaults command
#[derive(clap::Args, Debug)]
pub struct DefaultsArgs {
    /// Kind to print, e.g. `equation`
    #[arg(value_parser = parse_kind)]
    pub kind: MathObjectKind,

    /// Interface mode of the default
    #[arg(short, long, default_value = "simple")]
    pub mode: ModeArg,
}

/// Arguments for commands reading a settings file
#[derive(clap::Args, Debug)]
pub struct FileArgs {
    /// JSON file holding a math input record or bare settings
    pub file: PathBuf,
}

fn parse_kind(value: &str) -> Result<MathObjectKind, String> {
    value.parse().map_err(|err: mathforge::types::UnknownOption| {
        let known: Vec<&str> = MathObjectKind::ALL.iter().map(|kind| kind.as_str()).collect();
        format!("{err}; expected one of {}", known.join(", "))
    })
}

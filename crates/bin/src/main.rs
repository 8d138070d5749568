use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Warnings from the engine (e.g. keys filled from defaults) go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("mathforge=warn".parse()?))
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Kinds => commands::kinds::run(cli.format),
        Commands::Defaults(args) => commands::defaults::run(args, cli.format),
        Commands::Repair(args) => commands::repair::run(args, cli.format),
        Commands::Tree(args) => commands::tree::run(args, cli.format),
    }
}

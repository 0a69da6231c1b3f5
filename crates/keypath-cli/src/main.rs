//! keypath CLI
//!
//! Looks up dotted keys in JSON, JSON5, TOML, and YAML settings files.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    execute_command(cli.command)
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Get {
            source,
            key,
            default,
            raw,
        } => commands::run_get(&source, &key, default.as_deref(), raw),
        Commands::Has { source, key } => commands::run_has(&source, &key),
    }
}

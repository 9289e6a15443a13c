//! Anisotropic CLI - dependency boundary checks for bundler pipelines
//!
//! Usage: anisotropic <COMMAND>
//!
//! Commands:
//!   check       Evaluate every package file of a madge dependency graph
//!   package-of  Print the package owning a file

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Check {
            graph,
            project,
            config,
            warn,
        } => {
            let clean = commands::cmd_check(&graph, project, config, warn, cli.json)?;
            if !clean {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::PackageOf { path, project } => {
            commands::cmd_package_of(&path, project, cli.json)
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

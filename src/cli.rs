use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Anisotropic - dependency boundary checks for bundler pipelines
#[derive(Parser, Debug)]
#[command(name = "anisotropic")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (one JSON object per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check every installed-package file of a dependency graph
    Check {
        /// Dependency graph produced by `madge --json`
        #[arg(short, long)]
        graph: PathBuf,

        /// Project root (discovered from the working directory if omitted)
        #[arg(short, long)]
        project: Option<PathBuf>,

        /// Policy file (defaults to `anisotropic.toml` in the project root)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Report violations without failing
        #[arg(long)]
        warn: bool,
    },

    /// Print the package that owns a file
    PackageOf {
        /// File inside the packages root
        path: PathBuf,

        /// Project root (discovered from the working directory if omitted)
        #[arg(short, long)]
        project: Option<PathBuf>,
    },
}

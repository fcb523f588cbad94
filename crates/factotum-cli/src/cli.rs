//! CLI command definitions and argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Factotum - maintenance tooling for the content dataset.
#[derive(Debug, Parser)]
#[command(name = "factotum")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Strip the configured field from the configured database file
    StripField,

    /// Propagate verified source URLs from fact-checker JSONL output
    Propagate(PropagateArgs),
}

/// Arguments for the propagate command.
#[derive(Debug, Parser)]
pub struct PropagateArgs {
    /// JSONL file with fact-checker output
    pub input: Option<PathBuf>,

    /// Preview changes without writing to files
    #[arg(long)]
    pub dry_run: bool,

    /// Check all sources for expiry instead of propagating
    #[arg(long)]
    pub check_expiry: bool,
}

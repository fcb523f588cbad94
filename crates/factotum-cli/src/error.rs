//! Error types for the CLI application.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
///
/// Only setup failures live here: per-record problems (ineligible status,
/// unmapped ids, unresolvable paths) are reported through the skip list and
/// never abort a run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required input file is missing
    #[error("Input file not found: {0}")]
    MissingInput(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Sources pipeline error
    #[error(transparent)]
    Sources(#[from] factotum_sources::SourcesError),
}

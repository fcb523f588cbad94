//! Error types for the sources pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for sources operations.
pub type Result<T> = std::result::Result<T, SourcesError>;

/// Errors raised while moving databases and registries on and off disk.
///
/// Per-record problems (bad status, unmapped claim, unresolvable path) are
/// not errors; they travel through the propagation skip list instead.
#[derive(Debug, Error)]
pub enum SourcesError {
    /// Failed to read a file
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write {path}: {source}")]
    Write {
        /// File that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A file held invalid JSON
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        /// File with the malformed document
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A tree could not be serialized back to JSON
    #[error("failed to serialize {path}: {source}")]
    Serialize {
        /// Intended output file
        path: PathBuf,
        /// Underlying serialization error
        #[source]
        source: serde_json::Error,
    },
}

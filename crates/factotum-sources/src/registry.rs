//! The sources registry: provider metadata and expiry windows.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Result, SourcesError};

/// Registry file contents. `sources` maps source ids to entries; order is
/// preserved so audit reports follow the file.
#[derive(Debug, Default, Deserialize)]
pub struct SourcesRegistry {
    /// Source id → registry entry (kept as raw JSON; entries are validated
    /// lazily during the audit so one malformed entry never sinks the rest).
    #[serde(default)]
    pub sources: Map<String, Value>,
}

impl SourcesRegistry {
    /// Load the registry from `path`. A missing registry file is fatal: there
    /// is nothing meaningful to audit without it.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| SourcesError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| SourcesError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// One registry entry. Fields are optional on disk; entries lacking a publish
/// date or a recognizable expiry window are excluded from auditing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceEntry {
    /// Publishing organization, for reports.
    #[serde(default)]
    pub provider: String,

    /// Publication date, `YYYY-MM-DD`.
    #[serde(default)]
    pub published_date: Option<String>,

    /// Relative expiry window such as `6M`, `1Y`, or `30D`.
    #[serde(default)]
    pub expires_after: Option<String>,

    /// Topics this source backs, for reports.
    #[serde(default)]
    pub covers: Vec<String>,
}

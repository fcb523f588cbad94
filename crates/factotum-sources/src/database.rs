//! Named JSON databases and their on-disk lifecycle.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;
use tracing::warn;

use crate::error::{Result, SourcesError};

/// The JSON databases that claims can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Database {
    /// National statistics and website copy (`WEBSITE_CONTENT.json`).
    WebsiteContent,
    /// Per-city profiles and company ecosystems (`CITY_PROFILES.json`).
    CityProfiles,
    /// Salary and compensation figures (`COMPENSATION_DATA.json`).
    CompensationData,
    /// The consolidated master dataset (`MASTER.json`).
    Master,
}

impl Database {
    /// Every database, in canonical order.
    pub const ALL: [Database; 4] = [
        Database::WebsiteContent,
        Database::CityProfiles,
        Database::CompensationData,
        Database::Master,
    ];

    /// Canonical name, as used in claim mappings and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Database::WebsiteContent => "WEBSITE_CONTENT",
            Database::CityProfiles => "CITY_PROFILES",
            Database::CompensationData => "COMPENSATION_DATA",
            Database::Master => "MASTER",
        }
    }

    /// File name under the normalized data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Database::WebsiteContent => "WEBSITE_CONTENT.json",
            Database::CityProfiles => "CITY_PROFILES.json",
            Database::CompensationData => "COMPENSATION_DATA.json",
            Database::Master => "MASTER.json",
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// In-memory copies of the loaded databases, with dirty tracking.
///
/// Each run owns its own copies for its duration; there is no concurrent
/// writer model. A database whose file is missing is simply absent from the
/// set (a warning, never an error), and every claim targeting it is skipped.
#[derive(Debug, Default)]
pub struct DatabaseSet {
    trees: HashMap<Database, Value>,
    changed: HashSet<Database>,
}

impl DatabaseSet {
    /// An empty set with no databases loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every database found under `dir`.
    ///
    /// Missing files are tolerated with a warning. A file that exists but
    /// cannot be read or parsed is an error: silently propagating into a
    /// half-read database would corrupt it on save.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut set = Self::new();
        for database in Database::ALL {
            let path = dir.join(database.file_name());
            match fs::read_to_string(&path) {
                Ok(contents) => {
                    let tree = serde_json::from_str(&contents).map_err(|source| {
                        SourcesError::Parse {
                            path: path.clone(),
                            source,
                        }
                    })?;
                    set.trees.insert(database, tree);
                }
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    warn!(database = %database, path = %path.display(), "database file not found");
                }
                Err(source) => return Err(SourcesError::Read { path, source }),
            }
        }
        Ok(set)
    }

    /// Insert an in-memory tree for `database`, replacing any loaded copy.
    pub fn insert(&mut self, database: Database, tree: Value) {
        self.trees.insert(database, tree);
    }

    /// Whether `database` was loaded.
    pub fn is_loaded(&self, database: Database) -> bool {
        self.trees.contains_key(&database)
    }

    /// Immutable view of a loaded database.
    pub fn tree(&self, database: Database) -> Option<&Value> {
        self.trees.get(&database)
    }

    /// Mutable view of a loaded database. Mutating through this handle does
    /// not mark the database dirty; call [`DatabaseSet::mark_changed`] after
    /// a successful write.
    pub fn tree_mut(&mut self, database: Database) -> Option<&mut Value> {
        self.trees.get_mut(&database)
    }

    /// Record that `database` holds unsaved changes.
    pub fn mark_changed(&mut self, database: Database) {
        self.changed.insert(database);
    }

    /// Databases with unsaved changes, in canonical order.
    pub fn changed(&self) -> Vec<Database> {
        Database::ALL
            .into_iter()
            .filter(|database| self.changed.contains(database))
            .collect()
    }

    /// Persist every changed database under `dir`.
    ///
    /// Saves are independent: a failure on one database does not prevent the
    /// others from being attempted, and each result is reported separately.
    /// Databases without changes are left untouched on disk.
    pub fn save_changed(&self, dir: &Path) -> Vec<(Database, Result<()>)> {
        self.changed()
            .into_iter()
            .map(|database| {
                let result = match self.trees.get(&database) {
                    Some(tree) => write_pretty(&dir.join(database.file_name()), tree),
                    None => Ok(()),
                };
                (database, result)
            })
            .collect()
    }
}

/// Pretty-printed JSON with a trailing newline. `serde_json` already keeps
/// key order (via `preserve_order`) and leaves non-ASCII characters literal.
fn write_pretty(path: &Path, tree: &Value) -> Result<()> {
    let mut contents =
        serde_json::to_string_pretty(tree).map_err(|source| SourcesError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
    contents.push('\n');
    fs::write(path, contents).map_err(|source| SourcesError::Write {
        path: path.to_path_buf(),
        source,
    })
}

//! Configuration management for the maintenance tools.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CliError, Result};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "factotum.toml";

/// Tool configuration. Every field has a default, so running without a
/// config file works against the conventional dataset layout.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Root of the content dataset.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Field stripping settings.
    #[serde(default)]
    pub strip: StripConfig,
}

/// Settings for the strip-field command.
#[derive(Debug, Clone, Deserialize)]
pub struct StripConfig {
    /// Field name to remove wherever it appears.
    #[serde(default = "default_strip_field")]
    pub field: String,

    /// Target file, relative to `data_dir`.
    #[serde(default = "default_strip_file")]
    pub file: PathBuf,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist; otherwise `factotum.toml` in the
    /// working directory is used when present, and defaults apply when it
    /// is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else if explicit {
            Err(CliError::Config(format!(
                "config file '{}' not found",
                path.display()
            )))
        } else {
            Ok(Self::default())
        }
    }

    /// Directory holding the normalized databases.
    pub fn normalized_dir(&self) -> PathBuf {
        self.data_dir.join("normalized")
    }

    /// Path of the sources registry file.
    pub fn registry_path(&self) -> PathBuf {
        self.data_dir.join("sources.json")
    }

    /// Absolute target of the strip-field command.
    pub fn strip_target(&self) -> PathBuf {
        self.data_dir.join(&self.strip.file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            strip: StripConfig::default(),
        }
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            field: default_strip_field(),
            file: default_strip_file(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("public/data")
}

fn default_strip_field() -> String {
    "employees".to_string()
}

fn default_strip_file() -> PathBuf {
    PathBuf::from("normalized/CITY_PROFILES.json")
}

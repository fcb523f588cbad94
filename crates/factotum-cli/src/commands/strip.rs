//! Strip-field command implementation.

use std::fs;

use factotum_domain::{count_field, strip_field};

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the strip-field command: load the configured file, remove every
/// occurrence of the configured field, and write the document back in place.
pub fn execute_strip(config: &Config, formatter: &Formatter) -> Result<()> {
    let target = config.strip_target();
    if !target.exists() {
        return Err(CliError::MissingInput(target));
    }
    let field = &config.strip.field;

    let contents = fs::read_to_string(&target)?;
    let mut tree: serde_json::Value = serde_json::from_str(&contents)?;

    let found = count_field(&tree, field);
    let removed = strip_field(&mut tree, field);
    let remaining = count_field(&tree, field);

    let mut output = serde_json::to_string_pretty(&tree)?;
    output.push('\n');
    fs::write(&target, output)?;

    println!("{}", formatter.strip_report(field, found, removed, remaining));
    println!(
        "{}",
        formatter.success(&format!("Cleaned {}", target.display()))
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StripConfig;
    use serde_json::json;
    use std::path::PathBuf;

    fn config_for(dir: &std::path::Path) -> Config {
        Config {
            data_dir: dir.to_path_buf(),
            strip: StripConfig {
                field: "employees".to_string(),
                file: PathBuf::from("CITY_PROFILES.json"),
            },
        }
    }

    #[test]
    fn test_strip_rewrites_file_without_field() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("CITY_PROFILES.json");
        fs::write(
            &target,
            serde_json::to_string_pretty(&json!({
                "cities": {
                    "lisbon": {
                        "ecosystem": {
                            "techCompanies": [
                                { "name": "Talkdesk", "employees": 1200 }
                            ]
                        }
                    }
                }
            }))
            .unwrap(),
        )
        .unwrap();

        execute_strip(&config_for(dir.path()), &Formatter::new(false)).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
        assert_eq!(factotum_domain::count_field(&written, "employees"), 0);
        assert_eq!(
            written.pointer("/cities/lisbon/ecosystem/techCompanies/0/name"),
            Some(&json!("Talkdesk"))
        );
    }

    #[test]
    fn test_strip_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = execute_strip(&config_for(dir.path()), &Formatter::new(false));
        assert!(matches!(result, Err(CliError::MissingInput(_))));
    }

    #[test]
    fn test_strip_is_stable_on_second_run() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("CITY_PROFILES.json");
        fs::write(&target, r#"{"a": 1, "employees": 2, "b": {"employees": 3}}"#).unwrap();

        let config = config_for(dir.path());
        let formatter = Formatter::new(false);

        execute_strip(&config, &formatter).unwrap();
        let first = fs::read_to_string(&target).unwrap();

        execute_strip(&config, &formatter).unwrap();
        let second = fs::read_to_string(&target).unwrap();

        assert_eq!(first, second);
    }
}

//! Propagate command implementation: source URL propagation and the expiry
//! audit it shares an entry point with.

use std::fs;
use std::path::Path;

use chrono::Local;
use factotum_sources::{expiry, parse_jsonl, propagate, DatabaseSet, SourcesRegistry};

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the propagate command. Returns the process exit code (always 0;
/// per-claim problems are skips, not failures).
pub fn execute_propagate(
    input: &Path,
    dry_run: bool,
    config: &Config,
    formatter: &Formatter,
) -> Result<i32> {
    if !input.exists() {
        return Err(CliError::MissingInput(input.to_path_buf()));
    }

    let contents = fs::read_to_string(input)?;
    let (records, invalid) = parse_jsonl(&contents);
    for bad in &invalid {
        eprintln!(
            "{}",
            formatter.warning(&format!("Invalid JSON on line {}: {}", bad.line, bad.error))
        );
    }

    let normalized_dir = config.normalized_dir();
    let mut databases = DatabaseSet::load(&normalized_dir)?;

    let verified_date = Local::now().format("%Y-%m-%d").to_string();
    let outcome = propagate::apply(&records, &mut databases, &verified_date, dry_run);

    println!("{}", formatter.propagation_report(&outcome, dry_run));

    if !dry_run {
        // Saves are independent; report each database separately.
        for (database, result) in databases.save_changed(&normalized_dir) {
            match result {
                Ok(()) => println!("{}", formatter.success(&format!("Saved {}", database))),
                Err(err) => eprintln!(
                    "{}",
                    formatter.error(&format!("Failed to save {}: {}", database, err))
                ),
            }
        }
    }

    Ok(0)
}

/// Execute the expiry audit. Returns exit code 1 when any stale source
/// exists, so a pipeline can gate on it; 0 otherwise.
pub fn execute_check_expiry(config: &Config, formatter: &Formatter) -> Result<i32> {
    let registry = SourcesRegistry::load(&config.registry_path())?;
    let report = expiry::audit(&registry, Local::now().date_naive());

    println!("{}", formatter.expiry_report(&report));

    Ok(if report.has_stale() { 1 } else { 0 })
}

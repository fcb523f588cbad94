//! Source URL propagation from claim records into the databases.

use std::fmt;

use factotum_domain::{resolve, set_meta, DataPath};

use crate::claim::ClaimRecord;
use crate::claim_map;
use crate::database::{Database, DatabaseSet};

/// A claim applied (or, in dry-run, that would be applied) to a database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// The claim that produced the change.
    pub claim_id: String,
    /// Database the node lives in.
    pub database: Database,
    /// Dotted path of the mutated node.
    pub path: String,
    /// URL written to `meta.source.url`.
    pub url: String,
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {}.{} = {}",
            self.claim_id, self.database, self.path, self.url
        )
    }
}

/// Why a claim was not applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Status other than SUPPORTED / PARTIALLY_SUPPORTED.
    IneligibleStatus(String),
    /// The checker supplied no source URLs.
    NoSourceUrls,
    /// The claim id has no entry in the claim→path table.
    NoPathMapping,
    /// The mapped database file was not loaded.
    DatabaseUnavailable(Database),
    /// The mapped path does not address a meta-capable node in the database.
    PathNotFound {
        /// Database that was searched.
        database: Database,
        /// Path that failed to resolve.
        path: String,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::IneligibleStatus(status) => write!(f, "status={}", status),
            SkipReason::NoSourceUrls => write!(f, "no source_urls"),
            SkipReason::NoPathMapping => write!(f, "no path mapping"),
            SkipReason::DatabaseUnavailable(database) => {
                write!(f, "database {} not loaded", database)
            }
            SkipReason::PathNotFound { database, path } => {
                write!(f, "path {} not found in {}", path, database)
            }
        }
    }
}

/// A claim that was skipped, with its reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skip {
    /// The skipped claim.
    pub claim_id: String,
    /// Why it was skipped.
    pub reason: SkipReason,
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.claim_id, self.reason)
    }
}

/// Everything a propagation pass decided, in input order.
#[derive(Debug, Default)]
pub struct PropagationOutcome {
    /// Claims whose source URL was (or would be) written.
    pub changes: Vec<Change>,
    /// Claims that were skipped, with reasons.
    pub skips: Vec<Skip>,
}

/// Apply claim records to the loaded databases, in input order.
///
/// Eligible claims (SUPPORTED or PARTIALLY_SUPPORTED, at least one URL, a
/// mapped claim id, a loaded database, a resolvable path) get
/// `meta.source.url` and `meta.verifiedDate` written at their mapped node.
/// The first URL wins; later URLs in the record are ignored. A claim that
/// fails any check is recorded as a skip and never partially mutates a
/// database; other claims in the batch still apply.
///
/// With `dry_run` the full lookup and resolution chain runs but no tree is
/// mutated, so the change list matches what a real run would produce.
pub fn apply(
    records: &[ClaimRecord],
    databases: &mut DatabaseSet,
    verified_date: &str,
    dry_run: bool,
) -> PropagationOutcome {
    let mut outcome = PropagationOutcome::default();

    for record in records {
        match route(record, databases, verified_date, dry_run) {
            Ok(change) => outcome.changes.push(change),
            Err(reason) => outcome.skips.push(Skip {
                claim_id: record.claim_id.clone(),
                reason,
            }),
        }
    }

    outcome
}

fn route(
    record: &ClaimRecord,
    databases: &mut DatabaseSet,
    verified_date: &str,
    dry_run: bool,
) -> std::result::Result<Change, SkipReason> {
    if !record.status.is_eligible() {
        return Err(SkipReason::IneligibleStatus(
            record.status.as_str().to_string(),
        ));
    }
    let Some(url) = record.source_urls.first() else {
        return Err(SkipReason::NoSourceUrls);
    };
    let Some((database, path)) = claim_map::lookup(&record.claim_id) else {
        return Err(SkipReason::NoPathMapping);
    };

    let not_found = || SkipReason::PathNotFound {
        database,
        path: path.to_string(),
    };

    // Mapped paths are compiled constants; a parse failure here is a defect
    // in the table and surfaces as not-found rather than a panic.
    let parsed = DataPath::parse(path).map_err(|_| not_found())?;

    if dry_run {
        let tree = databases
            .tree(database)
            .ok_or(SkipReason::DatabaseUnavailable(database))?;
        // Mirror set_meta exactly: the node must exist and carry fields.
        match resolve(tree, &parsed) {
            Some(node) if node.is_object() => {}
            _ => return Err(not_found()),
        }
    } else {
        let tree = databases
            .tree_mut(database)
            .ok_or(SkipReason::DatabaseUnavailable(database))?;
        if !set_meta(tree, &parsed, url, verified_date) {
            return Err(not_found());
        }
        databases.mark_changed(database);
    }

    Ok(Change {
        claim_id: record.claim_id.clone(),
        database,
        path: path.to_string(),
        url: url.clone(),
    })
}

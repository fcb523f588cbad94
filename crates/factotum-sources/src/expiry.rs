//! Source staleness auditing.

use chrono::{Duration, NaiveDate};

use crate::registry::{SourceEntry, SourcesRegistry};

/// Days of advance warning before an expiry date.
pub const EXPIRY_WARNING_DAYS: i64 = 30;

/// Parse a relative expiry window like `6M`, `1Y`, or `30D`.
///
/// Months are a fixed 30 days and years a fixed 365. This is deliberately not
/// calendar-aware: downstream thresholds depend on these exact multiples.
/// Unrecognized suffixes and non-integer counts yield `None`.
pub fn parse_expiry(raw: &str) -> Option<Duration> {
    let unit = raw.chars().last()?;
    let count: i64 = raw[..raw.len() - unit.len_utf8()].parse().ok()?;
    let days = match unit {
        'M' => count.checked_mul(30)?,
        'Y' => count.checked_mul(365)?,
        'D' => count,
        _ => return None,
    };
    Duration::try_days(days)
}

/// A source whose expiry date has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleSource {
    /// Registry key of the source.
    pub source_id: String,
    /// Publishing organization.
    pub provider: String,
    /// Whole days since the expiry date.
    pub expired_days_ago: i64,
    /// Topics affected by the stale source.
    pub covers: Vec<String>,
}

/// A source expiring within the warning window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiringSource {
    /// Registry key of the source.
    pub source_id: String,
    /// Publishing organization.
    pub provider: String,
    /// Whole days until the expiry date (0 means it expires today).
    pub expires_in_days: i64,
    /// Topics affected when the source lapses.
    pub covers: Vec<String>,
}

/// Audit outcome. Sources appear in registry order; current sources are not
/// reported at all.
#[derive(Debug, Default)]
pub struct ExpiryReport {
    /// Sources past their expiry date.
    pub stale: Vec<StaleSource>,
    /// Sources expiring within [`EXPIRY_WARNING_DAYS`].
    pub expiring_soon: Vec<ExpiringSource>,
}

impl ExpiryReport {
    /// True when at least one stale source exists. Gates the exit code of
    /// the expiry check, so stale sources fail an automated pipeline.
    pub fn has_stale(&self) -> bool {
        !self.stale.is_empty()
    }
}

/// Classify every auditable registry entry against `today`.
///
/// An entry is auditable when it carries a parseable `publishedDate` and a
/// recognized `expiresAfter` window; everything else is silently excluded
/// (neither stale nor current).
pub fn audit(registry: &SourcesRegistry, today: NaiveDate) -> ExpiryReport {
    let mut report = ExpiryReport::default();

    for (source_id, value) in &registry.sources {
        let Ok(entry) = serde_json::from_value::<SourceEntry>(value.clone()) else {
            continue;
        };
        let (Some(published_raw), Some(expires_raw)) =
            (&entry.published_date, &entry.expires_after)
        else {
            continue;
        };
        let Ok(published) = NaiveDate::parse_from_str(published_raw, "%Y-%m-%d") else {
            continue;
        };
        let Some(window) = parse_expiry(expires_raw) else {
            continue;
        };

        let Some(expiry) = published.checked_add_signed(window) else {
            continue;
        };
        let days_until = (expiry - today).num_days();

        if days_until < 0 {
            report.stale.push(StaleSource {
                source_id: source_id.clone(),
                provider: entry.provider,
                expired_days_ago: -days_until,
                covers: entry.covers,
            });
        } else if days_until <= EXPIRY_WARNING_DAYS {
            report.expiring_soon.push(ExpiringSource {
                source_id: source_id.clone(),
                provider: entry.provider,
                expires_in_days: days_until,
                covers: entry.covers,
            });
        }
    }

    report
}

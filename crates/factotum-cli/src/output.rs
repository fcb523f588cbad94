//! Report formatting for the CLI.

use colored::*;
use factotum_sources::expiry::ExpiryReport;
use factotum_sources::propagate::PropagationOutcome;

/// Skips listed individually before the report collapses to a count.
const SKIP_LIST_LIMIT: usize = 10;

/// Console report formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Section header used at the top of each report.
    pub fn header(&self, title: &str) -> String {
        let bar = "=".repeat(60);
        format!("\n{}\n{}\n{}", bar, title, bar)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format the strip-field summary. The counts are internally consistent:
    /// removed always equals found minus remaining.
    pub fn strip_report(&self, field: &str, found: usize, removed: usize, remaining: usize) -> String {
        let mut lines = vec![self.header("FIELD STRIP")];
        lines.push(format!("Found {} '{}' field(s)", found, field));
        lines.push(format!("Removed {} '{}' field(s)", removed, field));
        lines.push(format!("Remaining: {}", remaining));
        lines.join("\n")
    }

    /// Format the propagation report: applied changes, then skips with
    /// reasons (first ten listed, the rest summarized).
    pub fn propagation_report(&self, outcome: &PropagationOutcome, dry_run: bool) -> String {
        let mut lines = vec![self.header("SOURCE URL PROPAGATION")];

        if outcome.changes.is_empty() {
            lines.push(self.warning("No updates to apply"));
        } else {
            lines.push(self.success(&format!("UPDATES ({})", outcome.changes.len())));
            for change in &outcome.changes {
                lines.push(format!("  • {}", change));
            }
        }

        if !outcome.skips.is_empty() {
            lines.push(self.info(&format!("SKIPPED ({})", outcome.skips.len())));
            for skip in outcome.skips.iter().take(SKIP_LIST_LIMIT) {
                lines.push(format!("  • {}", skip));
            }
            if outcome.skips.len() > SKIP_LIST_LIMIT {
                lines.push(format!(
                    "  ... and {} more",
                    outcome.skips.len() - SKIP_LIST_LIMIT
                ));
            }
        }

        if dry_run {
            lines.push(self.info("Dry run - no changes written"));
        }

        lines.join("\n")
    }

    /// Format the expiry audit report: stale sources first, then the ones
    /// inside the 30-day warning window. Current sources are not listed.
    pub fn expiry_report(&self, report: &ExpiryReport) -> String {
        let mut lines = vec![self.header("SOURCE EXPIRY CHECK")];

        if report.stale.is_empty() {
            lines.push(self.success("No stale sources found"));
        } else {
            lines.push(self.error(&format!("STALE SOURCES ({})", report.stale.len())));
            for source in &report.stale {
                lines.push(format!(
                    "  • {} ({}) expired {} day(s) ago",
                    source.source_id, source.provider, source.expired_days_ago
                ));
                lines.push(format!("    Affects: {}", source.covers.join(", ")));
            }
        }

        if report.expiring_soon.is_empty() {
            lines.push(self.success("No sources expiring within 30 days"));
        } else {
            lines.push(self.warning(&format!(
                "EXPIRING SOON ({})",
                report.expiring_soon.len()
            )));
            for source in &report.expiring_soon {
                lines.push(format!(
                    "  • {} ({}) expires in {} day(s)",
                    source.source_id, source.provider, source.expires_in_days
                ));
                lines.push(format!("    Affects: {}", source.covers.join(", ")));
            }
        }

        lines.join("\n")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

//! Fact-checker claim records and JSONL parsing.

use serde::Deserialize;

/// Verdict assigned to a claim by the external fact-checker.
///
/// Only the two exact strings `SUPPORTED` and `PARTIALLY_SUPPORTED` make a
/// claim eligible for propagation; every other verdict is carried verbatim
/// so skip reports can show it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ClaimStatus {
    /// The claim was fully verified.
    Supported,
    /// The claim was verified with caveats.
    PartiallySupported,
    /// Any other verdict (REJECTED, UNVERIFIABLE, ...), kept as-is.
    Other(String),
}

impl From<String> for ClaimStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "SUPPORTED" => ClaimStatus::Supported,
            "PARTIALLY_SUPPORTED" => ClaimStatus::PartiallySupported,
            _ => ClaimStatus::Other(raw),
        }
    }
}

impl Default for ClaimStatus {
    fn default() -> Self {
        ClaimStatus::Other(String::new())
    }
}

impl ClaimStatus {
    /// Whether a claim with this status may have its source propagated.
    pub fn is_eligible(&self) -> bool {
        matches!(self, ClaimStatus::Supported | ClaimStatus::PartiallySupported)
    }

    /// The verdict string as the checker emitted it.
    pub fn as_str(&self) -> &str {
        match self {
            ClaimStatus::Supported => "SUPPORTED",
            ClaimStatus::PartiallySupported => "PARTIALLY_SUPPORTED",
            ClaimStatus::Other(raw) => raw,
        }
    }
}

/// One fact-check verdict, as emitted (one JSON object per line) by the
/// external checker. Every field is defaulted so partial records still parse;
/// eligibility checks happen during propagation, not here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClaimRecord {
    /// Identifier the claim→path mapping is keyed by.
    #[serde(default)]
    pub claim_id: String,

    /// Informational only; propagation routes by claim id.
    #[serde(default)]
    pub target_id: String,

    /// The checker's verdict.
    #[serde(default)]
    pub status: ClaimStatus,

    /// Verified source URLs, best first. Propagation applies the first one.
    #[serde(default)]
    pub source_urls: Vec<String>,

    /// The value the checker verified. Unused by propagation.
    #[serde(default)]
    pub verified_value: String,

    /// Free-form checker notes.
    #[serde(default)]
    pub notes: String,
}

/// A line that failed to parse as a claim record.
#[derive(Debug, Clone)]
pub struct InvalidLine {
    /// 1-based line number in the input file.
    pub line: usize,
    /// The parse error message.
    pub error: String,
}

/// Parse newline-delimited claim records.
///
/// Blank lines are ignored. Invalid lines are collected with their line
/// numbers rather than aborting the batch.
pub fn parse_jsonl(input: &str) -> (Vec<ClaimRecord>, Vec<InvalidLine>) {
    let mut records = Vec::new();
    let mut invalid = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<ClaimRecord>(line) {
            Ok(record) => records.push(record),
            Err(err) => invalid.push(InvalidLine {
                line: index + 1,
                error: err.to_string(),
            }),
        }
    }

    (records, invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_is_exact() {
        assert_eq!(ClaimStatus::from("SUPPORTED".to_string()), ClaimStatus::Supported);
        assert_eq!(
            ClaimStatus::from("PARTIALLY_SUPPORTED".to_string()),
            ClaimStatus::PartiallySupported
        );
        // Case and near-misses stay ineligible.
        assert!(!ClaimStatus::from("supported".to_string()).is_eligible());
        assert!(!ClaimStatus::from("REJECTED".to_string()).is_eligible());
        assert!(ClaimStatus::Supported.is_eligible());
        assert!(ClaimStatus::PartiallySupported.is_eligible());
    }

    #[test]
    fn test_parse_full_record() {
        let line = r#"{
            "claim_id": "c0001",
            "target_id": "cityDatabase",
            "status": "SUPPORTED",
            "source_urls": ["https://example.org/a", "https://example.org/b"],
            "verified_value": "9100",
            "notes": "matches 2024 figures"
        }"#;
        let record: ClaimRecord = serde_json::from_str(line).unwrap();
        assert_eq!(record.claim_id, "c0001");
        assert_eq!(record.status, ClaimStatus::Supported);
        assert_eq!(record.source_urls.len(), 2);
    }

    #[test]
    fn test_parse_partial_record_defaults() {
        let record: ClaimRecord = serde_json::from_str(r#"{"claim_id":"c0002"}"#).unwrap();
        assert_eq!(record.claim_id, "c0002");
        assert!(record.source_urls.is_empty());
        assert!(!record.status.is_eligible());
    }

    #[test]
    fn test_parse_jsonl_skips_blanks_and_collects_errors() {
        let input = "\n{\"claim_id\":\"c0001\",\"status\":\"SUPPORTED\"}\n   \nnot json\n{\"claim_id\":\"c0002\"}\n";
        let (records, invalid) = parse_jsonl(input);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].claim_id, "c0001");
        assert_eq!(records[1].claim_id, "c0002");

        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].line, 4);
    }
}

//! Factotum sources pipeline.
//!
//! Everything between the fact-checker's JSONL output and the JSON databases
//! on disk: claim records, the static claim→path mapping, the database set
//! with dirty tracking, source URL propagation, and the registry expiry
//! audit.

pub mod claim;
pub mod claim_map;
pub mod database;
pub mod error;
pub mod expiry;
pub mod propagate;
pub mod registry;

pub use claim::{parse_jsonl, ClaimRecord, ClaimStatus, InvalidLine};
pub use database::{Database, DatabaseSet};
pub use error::{Result, SourcesError};
pub use expiry::{audit, parse_expiry, ExpiryReport};
pub use propagate::{apply, Change, PropagationOutcome, Skip, SkipReason};
pub use registry::{SourceEntry, SourcesRegistry};

//! Factotum Domain Layer
//!
//! JSON-tree primitives shared by every factotum tool: dotted-path parsing,
//! read resolution, source-meta injection, and recursive field stripping.
//!
//! ## Key Concepts
//!
//! - **DataPath**: a parsed dotted path such as
//!   `national.digitalInfrastructure.subseaCables.cables[EllaLink]`
//! - **Resolution**: left-to-right descent that fails softly (`None`) at the
//!   first segment that cannot be satisfied
//! - **Meta injection**: writing `meta.source.url` and `meta.verifiedDate`
//!   onto an addressed node while preserving every sibling field
//! - **Field stripping**: order-preserving removal of a named field at every
//!   nesting depth
//!
//! All operations work on `serde_json::Value` trees; the `preserve_order`
//! feature keeps object key order intact across a load/mutate/save cycle.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod path;
pub mod resolve;
pub mod strip;

// Re-exports for convenience
pub use path::{DataPath, PathParseError, PathSegment};
pub use resolve::{resolve, set_meta};
pub use strip::{count_field, strip_field};

//! Wikileaders Domain Layer
//!
//! Core data model shared by every other crate in the workspace.
//!
//! ## Key Concepts
//!
//! - **Country**: Opaque identifier used as a query parameter and result key
//! - **LeaderRecord**: A leader as listed by the directory API, plus the
//!   `first_paragraph` attached by enrichment
//! - **PipelineResult**: Ordered mapping from country to its enriched leaders
//!
//! Nothing here performs I/O. Network, parsing and concurrency live in the
//! client, extractor and pipeline crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod country;
pub mod leader;
pub mod result;

// Re-exports for convenience
pub use country::Country;
pub use leader::LeaderRecord;
pub use result::PipelineResult;

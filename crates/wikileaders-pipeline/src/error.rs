//! Error types for pipeline runs

use thiserror::Error;
use wikileaders_client::{ClientError, DirectoryError};
use wikileaders_extractor::ExtractorError;

/// Errors that abort a pipeline run
///
/// Per-leader fetch failures never surface here; they degrade to an empty
/// paragraph and are counted in [`crate::EnrichmentMetrics`].
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A directory call failed after its single retry
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// The HTTP session could not be opened
    #[error("Session error: {0}")]
    Session(#[from] ClientError),

    /// The biography fetcher could not be built
    #[error("Extractor error: {0}")]
    Extractor(#[from] ExtractorError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

//! Error types for the Extractor

use thiserror::Error;
use wikileaders_client::ClientError;

/// Errors that can occur while fetching a biography
///
/// None of these are fatal to a pipeline run: a failed fetch means "no
/// biography available" for that one leader.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The page request itself failed (connection, timeout, closed session)
    #[error("Fetch failed: {0}")]
    Fetch(#[from] ClientError),

    /// The response body could not be read
    #[error("Failed to read page body: {0}")]
    Body(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

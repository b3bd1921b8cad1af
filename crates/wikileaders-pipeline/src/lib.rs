//! Wikileaders Pipeline
//!
//! Walks the leaders directory country by country and attaches a Wikipedia
//! biography paragraph to every leader.
//!
//! # Overview
//!
//! ```text
//! Pipeline ─┬─ DirectoryClient::list_countries
//!           └─ for each country (sequential):
//!                DirectoryClient::list_leaders
//!                Enricher::enrich ── up to `workers` concurrent fetches
//!                    └─ fetch page → select paragraph → normalize
//! ```
//!
//! Countries are processed one after another; within a country, leaders are
//! enriched concurrently and gathered back into directory order. A leader
//! whose page cannot be fetched gets an empty paragraph; only directory
//! failures abort the run.
//!
//! # Usage
//!
//! ```no_run
//! use wikileaders_pipeline::{Pipeline, PipelineConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut pipeline = Pipeline::new(PipelineConfig::default())?;
//!     let result = pipeline.run().await?;
//!
//!     println!("{} countries, {} leaders", result.len(), result.total_leaders());
//!     println!("{}", pipeline.metrics().summary());
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! workers = 5
//! countries = ["be", "fr"]
//!
//! [client]
//! root_url = "https://country-leaders.onrender.com"
//! timeout_secs = 3
//!
//! [extractor]
//! min_paragraph_chars = 100
//! ```

#![warn(missing_docs)]

mod config;
mod driver;
mod enricher;
mod error;
mod metrics;

pub use config::{PipelineConfig, DEFAULT_WORKERS};
pub use driver::Pipeline;
pub use enricher::{EnrichmentOutcome, Enricher};
pub use error::PipelineError;
pub use metrics::EnrichmentMetrics;

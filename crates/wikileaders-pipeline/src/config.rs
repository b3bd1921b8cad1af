//! Configuration for pipeline runs

use serde::{Deserialize, Serialize};
use wikileaders_client::ClientConfig;
use wikileaders_domain::Country;
use wikileaders_extractor::ExtractorConfig;

/// Default number of concurrent enrichment workers
pub const DEFAULT_WORKERS: usize = 5;

/// Configuration for a pipeline run
///
/// # Examples
///
/// ```
/// use wikileaders_pipeline::PipelineConfig;
///
/// let config = PipelineConfig::default();
/// assert_eq!(config.workers, 5);
/// assert!(config.countries.is_empty());
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Directory connection settings
    pub client: ClientConfig,

    /// Biography extraction settings
    pub extractor: ExtractorConfig,

    /// Maximum concurrent page fetches per country
    pub workers: usize,

    /// Restrict the run to these countries; empty means every country
    pub countries: Vec<Country>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            extractor: ExtractorConfig::default(),
            workers: DEFAULT_WORKERS,
            countries: Vec::new(),
        }
    }
}

impl PipelineConfig {
    /// Set the worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Restrict the run to the given countries
    pub fn with_countries<I, C>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Country>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    /// Validate this and the nested configurations
    pub fn validate(&self) -> Result<(), String> {
        if self.workers == 0 {
            return Err("workers must be greater than 0".to_string());
        }
        self.client.validate()?;
        self.extractor.validate()?;
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

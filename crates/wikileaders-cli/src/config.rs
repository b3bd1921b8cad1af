//! Configuration file handling for the CLI.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use wikileaders_client::ClientConfig;
use wikileaders_domain::Country;
use wikileaders_extractor::ExtractorConfig;
use wikileaders_pipeline::{PipelineConfig, DEFAULT_WORKERS};

/// CLI configuration.
///
/// ```toml
/// [client]
/// root_url = "https://country-leaders.onrender.com"
///
/// [pipeline]
/// workers = 5
/// countries = ["be"]
///
/// [output]
/// json = "leaders.json"
/// csv = "leaders.csv"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory connection settings
    #[serde(default)]
    pub client: ClientConfig,

    /// Biography extraction settings
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Run settings
    #[serde(default)]
    pub pipeline: RunSettings,

    /// Output files
    #[serde(default)]
    pub output: OutputSettings,
}

/// Concurrency and country selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSettings {
    /// Maximum concurrent Wikipedia fetches
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Countries to scrape; empty means all
    #[serde(default)]
    pub countries: Vec<String>,
}

/// Output file locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// JSON output path
    #[serde(default = "default_json_path")]
    pub json: PathBuf,

    /// CSV output path; `None` skips the CSV file
    #[serde(default = "default_csv_path")]
    pub csv: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load the file named on the command line, if any, then apply flags.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_overrides(cli);
        Ok(config)
    }

    /// Let command-line flags win over file values.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(root_url) = &cli.root_url {
            self.client.root_url = root_url.clone();
        }
        if let Some(timeout) = cli.timeout {
            self.client.timeout_secs = timeout;
        }
        if let Some(workers) = cli.workers {
            self.pipeline.workers = workers;
        }
        if !cli.countries.is_empty() {
            self.pipeline.countries = cli.countries.clone();
        }
        if let Some(json) = &cli.json {
            self.output.json = json.clone();
        }
        if let Some(csv) = &cli.csv {
            self.output.csv = Some(csv.clone());
        }
        if cli.no_csv {
            self.output.csv = None;
        }
    }

    /// Build the pipeline configuration, validating it.
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let config = PipelineConfig {
            client: self.client.clone(),
            extractor: self.extractor.clone(),
            workers: self.pipeline.workers,
            countries: self.pipeline.countries.iter().map(Country::new).collect(),
        };
        config.validate().map_err(CliError::Config)?;
        Ok(config)
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            countries: Vec::new(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            json: default_json_path(),
            csv: default_csv_path(),
        }
    }
}

fn default_workers() -> usize {
    DEFAULT_WORKERS
}

fn default_json_path() -> PathBuf {
    PathBuf::from("leaders.json")
}

fn default_csv_path() -> Option<PathBuf> {
    Some(PathBuf::from("leaders.csv"))
}

//! Configuration for the directory client

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default directory API root
pub const DEFAULT_ROOT_URL: &str = "https://country-leaders.onrender.com";

/// Default per-request timeout (3 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// Connection settings for the directory API
///
/// # Examples
///
/// ```
/// use wikileaders_client::ClientConfig;
///
/// let config = ClientConfig::default();
/// assert_eq!(config.timeout_secs, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root, without trailing slash
    pub root_url: String,

    /// Endpoint that issues the auth cookie
    pub cookie_endpoint: String,

    /// Endpoint listing country codes
    pub countries_endpoint: String,

    /// Endpoint listing leaders, takes a `country` query parameter
    pub leaders_endpoint: String,

    /// Timeout applied to every HTTP call (seconds)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            root_url: DEFAULT_ROOT_URL.to_string(),
            cookie_endpoint: "cookie".to_string(),
            countries_endpoint: "countries".to_string(),
            leaders_endpoint: "leaders".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at a different API root
    pub fn with_root_url(root_url: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
            ..Self::default()
        }
    }

    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.root_url.trim().is_empty() {
            return Err("root_url must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        for (name, endpoint) in [
            ("cookie_endpoint", &self.cookie_endpoint),
            ("countries_endpoint", &self.countries_endpoint),
            ("leaders_endpoint", &self.leaders_endpoint),
        ] {
            if endpoint.trim().is_empty() {
                return Err(format!("{} must not be empty", name));
            }
        }
        Ok(())
    }
}

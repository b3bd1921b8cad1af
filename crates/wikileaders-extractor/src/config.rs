//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Client identification sent with every Wikipedia request
pub const DEFAULT_USER_AGENT: &str =
    "wikileaders/0.1 (leaders biography scraper; https://github.com/Lalovan/)";

/// Minimum trimmed length, in characters, of a qualifying paragraph
pub const DEFAULT_MIN_PARAGRAPH_CHARS: usize = 100;

/// Configuration for biography extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// `User-Agent` naming the tool and a contact channel
    pub user_agent: String,

    /// Minimum paragraph length (characters, after trimming)
    pub min_paragraph_chars: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            min_paragraph_chars: DEFAULT_MIN_PARAGRAPH_CHARS,
        }
    }
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }
        if !self.user_agent.chars().all(|c| c == ' ' || c.is_ascii_graphic()) {
            return Err("user_agent must be printable ASCII".to_string());
        }
        if self.min_paragraph_chars == 0 {
            return Err("min_paragraph_chars must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

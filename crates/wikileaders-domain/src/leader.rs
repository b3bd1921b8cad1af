//! Leader records

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A political leader as listed by the directory API
///
/// All directory fields are optional: missing keys and explicit `null`s both
/// deserialize to `None`. Fields the directory sends beyond the four this
/// crate interprets (`id`, `start_mandate`, ...) are kept in `extra` and
/// written back out unchanged.
///
/// `first_paragraph` is `None` until the record has been through enrichment,
/// after which it is always `Some` (possibly empty).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderRecord {
    /// Given name
    #[serde(default)]
    pub first_name: Option<String>,

    /// Family name
    #[serde(default)]
    pub last_name: Option<String>,

    /// Birth date, ISO-like (`1947-02-21`)
    #[serde(default)]
    pub birth_date: Option<String>,

    /// Link to the leader's Wikipedia article
    #[serde(default)]
    pub wikipedia_url: Option<String>,

    /// Introductory biography paragraph attached by enrichment
    #[serde(default)]
    pub first_paragraph: Option<String>,

    /// Directory fields not interpreted by the pipeline
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LeaderRecord {
    /// Create a record with just a name; mostly useful in tests and fixtures
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            ..Default::default()
        }
    }

    /// Set the birth date
    pub fn with_birth_date(mut self, birth_date: impl Into<String>) -> Self {
        self.birth_date = Some(birth_date.into());
        self
    }

    /// Set the Wikipedia URL
    pub fn with_wikipedia_url(mut self, url: impl Into<String>) -> Self {
        self.wikipedia_url = Some(url.into());
        self
    }

    /// The Wikipedia URL, if present and non-empty
    pub fn wikipedia_url(&self) -> Option<&str> {
        self.wikipedia_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Lowercased first name, or `""` when absent
    pub fn name_key(&self) -> String {
        self.first_name
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default()
    }

    /// First four characters of the birth date, or `""` when the date is
    /// absent or shorter than four characters
    pub fn year_key(&self) -> String {
        match self.birth_date.as_deref() {
            Some(date) if date.chars().count() >= 4 => date.chars().take(4).collect(),
            _ => String::new(),
        }
    }

    /// Whether enrichment has already attached a paragraph
    pub fn is_enriched(&self) -> bool {
        self.first_paragraph.is_some()
    }

    /// "First Last" with whatever parts are present
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

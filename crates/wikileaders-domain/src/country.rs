//! Country identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque country identifier as issued by the directory API (e.g. `"be"`)
///
/// The value is never interpreted; it is sent back verbatim as the `country`
/// query parameter and used as the key of the pipeline output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Country(String);

impl Country {
    /// Wrap a raw country code
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Borrow the raw code
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Country {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Country {
    fn from(code: String) -> Self {
        Self(code)
    }
}

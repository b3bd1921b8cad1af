//! Error types for the directory client.

use std::fmt;
use thiserror::Error;
use wikileaders_domain::Country;

/// Errors raised by a single HTTP exchange
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection failure or timeout
    #[error("Transport error: {0}")]
    Transport(String),

    /// The directory rejected the auth cookie
    #[error("Authentication rejected (HTTP {status})")]
    Auth {
        /// Status code returned (401 or 403)
        status: u16,
    },

    /// Any other non-2xx response
    #[error("HTTP {status}: {body}")]
    Status {
        /// Status code returned
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// Body could not be decoded into the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Request target could not be turned into a URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The session was closed before the request was issued
    #[error("Session is closed")]
    Closed,
}

impl ClientError {
    /// True for connection and timeout failures
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    /// True when the directory rejected the auth cookie
    pub fn is_auth(&self) -> bool {
        matches!(self, ClientError::Auth { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Transport(format!("request timed out: {}", e))
        } else if e.is_connect() {
            ClientError::Transport(format!("connection failed: {}", e))
        } else if e.is_decode() {
            ClientError::MalformedResponse(e.to_string())
        } else if e.is_builder() {
            ClientError::InvalidUrl(e.to_string())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::MalformedResponse(format!("JSON parsing error: {}", e))
    }
}

/// Directory call that failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Obtaining or refreshing the auth cookie
    Cookie,
    /// Listing countries
    Countries,
    /// Listing the leaders of one country
    Leaders(Country),
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Cookie => f.write_str("cookie"),
            Stage::Countries => f.write_str("countries"),
            Stage::Leaders(country) => write!(f, "leaders (country={})", country),
        }
    }
}

/// Fatal directory failure, tagged with the stage that failed
#[derive(Debug, Error)]
#[error("{stage} request failed: {source}")]
pub struct DirectoryError {
    /// Which directory call failed
    pub stage: Stage,
    /// Underlying cause
    #[source]
    pub source: ClientError,
}

impl DirectoryError {
    /// Tag a client error with its stage
    pub fn new(stage: Stage, source: ClientError) -> Self {
        Self { stage, source }
    }
}

//! Wikileaders directory client
//!
//! Session handling and enumeration against the cookie-gated leaders
//! directory API.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use wikileaders_client::{ClientConfig, DirectoryClient, Session};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let session = Arc::new(Session::open(ClientConfig::default())?);
//! let directory = DirectoryClient::new(Arc::clone(&session));
//!
//! for country in directory.list_countries().await? {
//!     let leaders = directory.list_leaders(&country).await?;
//!     println!("{}: {} leaders", country, leaders.len());
//! }
//!
//! session.close();
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod directory;
mod error;
mod session;

pub use config::ClientConfig;
pub use directory::DirectoryClient;
pub use error::{ClientError, DirectoryError, Stage};
pub use session::Session;

/// Re-exported so callers can build requests without naming reqwest directly
pub use reqwest::{header, Method, StatusCode, Url};

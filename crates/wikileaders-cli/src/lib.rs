//! Wikileaders CLI library.
//!
//! Argument parsing, configuration loading and the JSON/CSV writers used by
//! the `wikileaders` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};

//! CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Scrape world leaders and their Wikipedia biographies.
#[derive(Debug, Default, Parser)]
#[command(name = "wikileaders")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, env = "WIKILEADERS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Root URL of the leaders directory API
    #[arg(long, env = "WIKILEADERS_ROOT_URL")]
    pub root_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Maximum concurrent Wikipedia fetches
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Only scrape this country (repeatable)
    #[arg(long = "country", value_name = "CODE")]
    pub countries: Vec<String>,

    /// Where to write the JSON output
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Where to write the CSV output
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Skip writing the CSV output
    #[arg(long)]
    pub no_csv: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["wikileaders"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.countries.is_empty());
        assert!(!cli.no_csv);
    }

    #[test]
    fn test_repeated_country() {
        let cli = Cli::try_parse_from([
            "wikileaders",
            "--country",
            "be",
            "--country",
            "fr",
            "--workers",
            "3",
            "--json",
            "out.json",
        ])
        .unwrap();

        assert_eq!(cli.countries, vec!["be", "fr"]);
        assert_eq!(cli.workers, Some(3));
        assert_eq!(cli.json, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_invalid_workers() {
        assert!(Cli::try_parse_from(["wikileaders", "--workers", "many"]).is_err());
    }
}

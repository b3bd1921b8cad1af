//! Wikileaders - scrape world leaders and their Wikipedia biographies.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wikileaders_cli::{output, Cli, Config};
use wikileaders_pipeline::Pipeline;

#[tokio::main]
async fn main() {
    // Log to stderr; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> wikileaders_cli::Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(&cli)?;

    let mut pipeline = Pipeline::new(config.pipeline_config()?)?;
    let result = pipeline.run().await?;

    output::save_json(&result, &config.output.json)?;
    info!("Wrote {}", config.output.json.display());

    if let Some(csv) = &config.output.csv {
        output::save_csv(&result, csv)?;
        info!("Wrote {}", csv.display());
    }

    info!(
        "{} countries, {} leaders",
        result.len(),
        result.total_leaders()
    );
    Ok(())
}

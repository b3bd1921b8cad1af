//! End-to-end run over the leaders directory

use crate::config::PipelineConfig;
use crate::enricher::Enricher;
use crate::error::PipelineError;
use crate::metrics::EnrichmentMetrics;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use wikileaders_client::{DirectoryClient, Session};
use wikileaders_domain::{Country, PipelineResult};

/// Drives one complete scrape
///
/// Owns the session for the duration of the run and closes it once
/// [`Pipeline::run`] returns, successfully or not. A pipeline runs once.
pub struct Pipeline {
    session: Arc<Session>,
    directory: DirectoryClient,
    enricher: Enricher,
    countries: Vec<Country>,
    metrics: EnrichmentMetrics,
}

impl Pipeline {
    /// Validate `config` and open the session
    pub fn new(config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate().map_err(PipelineError::Config)?;

        let session = Arc::new(Session::open(config.client)?);
        let directory = DirectoryClient::new(Arc::clone(&session));
        let enricher = Enricher::new(Arc::clone(&session), &config.extractor, config.workers)?;

        Ok(Self {
            session,
            directory,
            enricher,
            countries: config.countries,
            metrics: EnrichmentMetrics::new(),
        })
    }

    /// Shared session, mainly for inspection
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Counters accumulated by [`Pipeline::run`]
    pub fn metrics(&self) -> &EnrichmentMetrics {
        &self.metrics
    }

    /// Scrape every (selected) country and enrich its leaders
    ///
    /// Countries are processed sequentially in directory order. Any
    /// directory failure aborts the run; page failures only blank the
    /// affected leader's paragraph.
    pub async fn run(&mut self) -> Result<PipelineResult, PipelineError> {
        let start = Instant::now();
        let outcome = self.collect().await;
        self.session.close();

        self.metrics.token_fetches = self.session.token_fetches();
        self.metrics.total_runtime_ms = start.elapsed().as_millis() as u64;
        info!("Run finished\n{}", self.metrics.summary());

        outcome
    }

    async fn collect(&mut self) -> Result<PipelineResult, PipelineError> {
        let listed = self.directory.list_countries().await?;
        let countries = self.select_countries(listed);

        let mut result = PipelineResult::new();
        for country in countries {
            let leaders = self.directory.list_leaders(&country).await?;
            info!(
                "Processing country: {}, leaders found: {}",
                country,
                leaders.len()
            );

            let (enriched, batch) = self.enricher.enrich_batch(leaders).await;
            self.metrics.merge(&batch);
            self.metrics.record_country();
            result.insert(country, enriched);
        }

        Ok(result)
    }

    fn select_countries(&self, listed: Vec<Country>) -> Vec<Country> {
        if self.countries.is_empty() {
            return listed;
        }

        for wanted in &self.countries {
            if !listed.contains(wanted) {
                warn!("Country {} is not listed by the directory", wanted);
            }
        }

        listed
            .into_iter()
            .filter(|country| self.countries.contains(country))
            .collect()
    }
}

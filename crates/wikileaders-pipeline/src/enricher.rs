//! Concurrent biography enrichment for one country's leaders

use crate::error::PipelineError;
use crate::metrics::EnrichmentMetrics;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, warn};
use wikileaders_client::Session;
use wikileaders_domain::LeaderRecord;
use wikileaders_extractor::{extract_biography, BiographyFetcher, ExtractorConfig, ParagraphSelector};

/// What happened to a single leader during enrichment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentOutcome {
    /// No Wikipedia URL; nothing was fetched
    Skipped,
    /// A paragraph was selected
    Enriched,
    /// The page was fetched but no paragraph qualified
    NoQualifyingParagraph,
    /// The page could not be fetched
    FetchFailed,
}

/// Attaches a first paragraph to every leader in a batch
///
/// At most `workers` pages are in flight at once. Output order always
/// matches input order, whatever order the fetches complete in.
pub struct Enricher {
    fetcher: BiographyFetcher,
    selector: ParagraphSelector,
    limit: Arc<Semaphore>,
    workers: usize,
}

impl Enricher {
    /// Create an enricher fetching over `session`
    pub fn new(
        session: Arc<Session>,
        config: &ExtractorConfig,
        workers: usize,
    ) -> Result<Self, PipelineError> {
        if workers == 0 {
            return Err(PipelineError::Config(
                "workers must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            fetcher: BiographyFetcher::new(session, config)?,
            selector: ParagraphSelector::new(config.min_paragraph_chars),
            limit: Arc::new(Semaphore::new(workers)),
            workers,
        })
    }

    /// Maximum concurrent fetches
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Enrich `leaders`, returning them in their original order
    pub async fn enrich(&self, leaders: Vec<LeaderRecord>) -> Vec<LeaderRecord> {
        self.enrich_batch(leaders).await.0
    }

    /// Enrich `leaders` and count what happened to each one
    ///
    /// Every returned record has `first_paragraph` set; it is empty when
    /// the leader had no URL, the fetch failed, or nothing qualified.
    pub async fn enrich_batch(
        &self,
        leaders: Vec<LeaderRecord>,
    ) -> (Vec<LeaderRecord>, EnrichmentMetrics) {
        let total = leaders.len();
        let mut slots: Vec<Option<(LeaderRecord, EnrichmentOutcome)>> =
            (0..total).map(|_| None).collect();
        // Copies of in-flight records, used if a task dies before reporting
        let mut pending: Vec<Option<LeaderRecord>> = (0..total).map(|_| None).collect();
        let mut tasks = JoinSet::new();

        for (index, mut leader) in leaders.into_iter().enumerate() {
            let Some(url) = leader.wikipedia_url().map(str::to_string) else {
                leader.first_paragraph = Some(String::new());
                slots[index] = Some((leader, EnrichmentOutcome::Skipped));
                continue;
            };

            pending[index] = Some(leader.clone());
            let fetcher = self.fetcher.clone();
            let selector = self.selector;
            let limit = Arc::clone(&self.limit);

            tasks.spawn(async move {
                let _permit = limit.acquire_owned().await;
                let (paragraph, outcome) = enrich_one(&fetcher, &selector, &leader, &url).await;
                leader.first_paragraph = Some(paragraph);
                (index, leader, outcome)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, leader, outcome)) => slots[index] = Some((leader, outcome)),
                Err(e) => error!("Enrichment task failed: {}", e),
            }
        }

        let mut metrics = EnrichmentMetrics::new();
        let mut enriched = Vec::with_capacity(total);
        for (slot, fallback) in slots.into_iter().zip(pending) {
            let (leader, outcome) = match (slot, fallback) {
                (Some(done), _) => done,
                (None, Some(mut leader)) => {
                    leader.first_paragraph = Some(String::new());
                    (leader, EnrichmentOutcome::FetchFailed)
                }
                // Every index is filled either synchronously or via a task
                (None, None) => continue,
            };
            metrics.record_outcome(outcome);
            enriched.push(leader);
        }

        (enriched, metrics)
    }
}

async fn enrich_one(
    fetcher: &BiographyFetcher,
    selector: &ParagraphSelector,
    leader: &LeaderRecord,
    url: &str,
) -> (String, EnrichmentOutcome) {
    match fetcher.fetch_page(url).await {
        Ok(html) => {
            let paragraph = extract_biography(leader, &html, selector);
            if paragraph.is_empty() {
                debug!("No qualifying paragraph for {} at {}", leader.display_name(), url);
                (paragraph, EnrichmentOutcome::NoQualifyingParagraph)
            } else {
                (paragraph, EnrichmentOutcome::Enriched)
            }
        }
        Err(e) => {
            warn!("Request failed for {} ({}): {}", leader.display_name(), url, e);
            (String::new(), EnrichmentOutcome::FetchFailed)
        }
    }
}

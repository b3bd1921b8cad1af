//! Metrics collected during a pipeline run

use crate::enricher::EnrichmentOutcome;

/// Counters for one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichmentMetrics {
    /// Countries fully processed
    pub countries: usize,

    /// Leaders returned by the directory
    pub leaders: usize,

    /// Leaders without a Wikipedia URL (no fetch attempted)
    pub skipped_no_url: usize,

    /// Leaders that received a non-empty paragraph
    pub enriched: usize,

    /// Pages fetched where no paragraph qualified
    pub empty_selections: usize,

    /// Page fetches that failed
    pub fetch_failures: usize,

    /// Cookies issued by the directory during the run
    pub token_fetches: usize,

    /// Total runtime in milliseconds
    pub total_runtime_ms: u64,
}

impl EnrichmentMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one leader
    pub fn record_outcome(&mut self, outcome: EnrichmentOutcome) {
        self.leaders += 1;
        match outcome {
            EnrichmentOutcome::Skipped => self.skipped_no_url += 1,
            EnrichmentOutcome::Enriched => self.enriched += 1,
            EnrichmentOutcome::NoQualifyingParagraph => self.empty_selections += 1,
            EnrichmentOutcome::FetchFailed => self.fetch_failures += 1,
        }
    }

    /// Record a completed country
    pub fn record_country(&mut self) {
        self.countries += 1;
    }

    /// Fold another set of per-leader counters into this one
    pub fn merge(&mut self, other: &EnrichmentMetrics) {
        self.countries += other.countries;
        self.leaders += other.leaders;
        self.skipped_no_url += other.skipped_no_url;
        self.enriched += other.enriched;
        self.empty_selections += other.empty_selections;
        self.fetch_failures += other.fetch_failures;
    }

    /// Pages requested from Wikipedia
    pub fn pages_requested(&self) -> usize {
        self.enriched + self.empty_selections + self.fetch_failures
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        [
            "Enrichment Metrics Summary".to_string(),
            "==========================".to_string(),
            format!("Countries: {}", self.countries),
            format!("Leaders: {}", self.leaders),
            format!("  Enriched: {}", self.enriched),
            format!("  No Wikipedia URL: {}", self.skipped_no_url),
            format!("  No qualifying paragraph: {}", self.empty_selections),
            format!("  Fetch failures: {}", self.fetch_failures),
            format!("Pages requested: {}", self.pages_requested()),
            format!("Cookies issued: {}", self.token_fetches),
            format!("Total runtime: {}ms", self.total_runtime_ms),
        ]
        .join("\n")
    }
}

//! Wikipedia page retrieval

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use std::sync::Arc;
use tracing::debug;
use wikileaders_client::header::{HeaderMap, HeaderValue, USER_AGENT};
use wikileaders_client::{ClientError, Method, Session, Url};

/// Fetches raw article HTML over the shared session
///
/// Page requests carry the configured `User-Agent` and no directory cookie.
#[derive(Clone)]
pub struct BiographyFetcher {
    session: Arc<Session>,
    user_agent: HeaderValue,
}

impl BiographyFetcher {
    /// Create a fetcher sharing `session`'s transport
    pub fn new(session: Arc<Session>, config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| ExtractorError::Config(format!("Invalid user agent: {}", e)))?;

        Ok(Self {
            session,
            user_agent,
        })
    }

    /// GET `url` and return the body text
    ///
    /// `url` must be an absolute `http`/`https` URL; it is never resolved
    /// against the directory root. Errors mean "no biography available" and
    /// are for the caller to degrade, not propagate. A non-2xx page is still
    /// returned; whatever paragraphs it has go through selection like any
    /// other page.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ExtractorError> {
        let parsed = Url::parse(url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!("{}: not an http(s) URL", url)).into());
        }

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, self.user_agent.clone());

        let response = self
            .session
            .request(Method::GET, parsed.as_str(), &[], headers, None)
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!("{} answered HTTP {}", url, status);
        }

        response
            .text()
            .await
            .map_err(|e| ExtractorError::Body(e.to_string()))
    }
}

//! Session management for directory and page requests.
//!
//! A [`Session`] owns one pooled HTTP client and the auth cookie issued by
//! the directory's cookie endpoint. It is shared (behind an `Arc`) by every
//! enrichment worker. Reading the cookie is lock-light; refreshing it is
//! single-flight, so a burst of rejected requests produces one refresh.

use crate::config::ClientConfig;
use crate::error::ClientError;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE, SET_COOKIE};
use reqwest::{Method, Response, Url};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

/// Shared transport plus renewable auth cookie
pub struct Session {
    config: ClientConfig,
    http: reqwest::Client,
    token: RwLock<Option<String>>,
    refresh_gate: Mutex<()>,
    token_fetches: AtomicUsize,
    closed: AtomicBool,
}

impl Session {
    /// Build the transport. No network traffic happens here.
    pub fn open(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate().map_err(ClientError::Config)?;
        Url::parse(&config.root_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.root_url, e)))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {}", e)))?;

        debug!("Session opened for {}", config.root_url);

        Ok(Self {
            config,
            http,
            token: RwLock::new(None),
            refresh_gate: Mutex::new(()),
            token_fetches: AtomicUsize::new(0),
            closed: AtomicBool::new(false),
        })
    }

    /// Configuration this session was opened with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Return the cached cookie, fetching one if none is held yet.
    ///
    /// Concurrent callers that find no cookie queue on the refresh gate; only
    /// the first one issues the cookie request.
    pub async fn ensure_token(&self) -> Result<String, ClientError> {
        if let Some(token) = self.current_token().await {
            return Ok(token);
        }

        let _gate = self.refresh_gate.lock().await;
        if let Some(token) = self.current_token().await {
            return Ok(token);
        }

        self.fetch_and_store_token().await
    }

    /// Replace a cookie the directory rejected.
    ///
    /// `stale` is the cookie the caller was using. If another caller already
    /// replaced it while this one waited on the gate, the newer cookie is
    /// returned without a second request.
    pub async fn refresh_token(&self, stale: &str) -> Result<String, ClientError> {
        let _gate = self.refresh_gate.lock().await;

        let current = self.current_token().await;
        if let Some(token) = current {
            if token != stale {
                debug!("Cookie already refreshed by another caller");
                return Ok(token);
            }
        }

        info!("Refreshing directory cookie");
        self.fetch_and_store_token().await
    }

    /// Number of cookie requests issued so far
    pub fn token_fetches(&self) -> usize {
        self.token_fetches.load(Ordering::Relaxed)
    }

    /// Perform one HTTP call with the configured timeout.
    ///
    /// `path` is either an absolute URL or an endpoint relative to the API
    /// root. Transport failures are returned as [`ClientError::Transport`]
    /// and never retried here. The status code is left for the caller.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
        headers: HeaderMap,
        cookie: Option<&str>,
    ) -> Result<Response, ClientError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(ClientError::Closed);
        }

        let url = self.resolve(path)?;
        let mut request = self.http.request(method, url).headers(headers);

        if !params.is_empty() {
            request = request.query(params);
        }
        if let Some(cookie) = cookie {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| ClientError::MalformedResponse(format!("Unusable cookie: {}", e)))?;
            request = request.header(COOKIE, value);
        }

        Ok(request.send().await?)
    }

    /// Release the session. Requests issued afterwards fail with
    /// [`ClientError::Closed`]; pooled connections go away with the last
    /// handle.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
        info!(
            "Session closed ({} cookie request(s) issued)",
            self.token_fetches()
        );
    }

    /// Whether [`Session::close`] has been called
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    async fn current_token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    // Caller must hold the refresh gate.
    async fn fetch_and_store_token(&self) -> Result<String, ClientError> {
        self.token_fetches.fetch_add(1, Ordering::Relaxed);

        let response = self
            .request(
                Method::GET,
                &self.config.cookie_endpoint,
                &[],
                HeaderMap::new(),
                None,
            )
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let token = cookie_from_headers(response.headers()).ok_or_else(|| {
            ClientError::MalformedResponse("cookie endpoint did not set a cookie".to_string())
        })?;

        *self.token.write().await = Some(token.clone());
        debug!("Obtained directory cookie");

        Ok(token)
    }

    fn resolve(&self, path: &str) -> Result<Url, ClientError> {
        if let Ok(url) = Url::parse(path) {
            return Ok(url);
        }

        let joined = format!(
            "{}/{}",
            self.config.root_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", joined, e)))
    }
}

/// Extract the `name=value` pair of the first `Set-Cookie` header
fn cookie_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .map(str::trim)
        .find(|pair| pair.contains('=') && !pair.starts_with('='))
        .map(str::to_string)
}

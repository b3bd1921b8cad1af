//! Country and leader enumeration against the directory API.

use crate::error::{ClientError, DirectoryError, Stage};
use crate::session::Session;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};
use wikileaders_domain::{Country, LeaderRecord};

/// Directory API client
///
/// Cheap to clone; all clones share the same [`Session`].
#[derive(Clone)]
pub struct DirectoryClient {
    session: Arc<Session>,
}

impl DirectoryClient {
    /// Create a client over an open session
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// The shared session
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// List the country codes known to the directory
    pub async fn list_countries(&self) -> Result<Vec<Country>, DirectoryError> {
        let endpoint = self.session.config().countries_endpoint.clone();
        let countries: Vec<Country> = self.get_json(Stage::Countries, &endpoint, &[]).await?;
        debug!("Directory lists {} countries", countries.len());
        Ok(countries)
    }

    /// List the leaders of one country, in directory order
    ///
    /// Returned records are not yet enriched (`first_paragraph` is `None`).
    pub async fn list_leaders(&self, country: &Country) -> Result<Vec<LeaderRecord>, DirectoryError> {
        let endpoint = self.session.config().leaders_endpoint.clone();
        let stage = Stage::Leaders(country.clone());
        self.get_json(stage, &endpoint, &[("country", country.as_str())])
            .await
    }

    /// Authorized GET with one refresh-and-retry on cookie rejection
    async fn get_json<T: DeserializeOwned>(
        &self,
        stage: Stage,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, DirectoryError> {
        let token = self
            .session
            .ensure_token()
            .await
            .map_err(|e| DirectoryError::new(Stage::Cookie, e))?;

        match self.fetch_json(endpoint, params, &token).await {
            Err(ClientError::Auth { status }) => {
                warn!("{} rejected cookie (HTTP {}), refreshing once", stage, status);
                let fresh = self
                    .session
                    .refresh_token(&token)
                    .await
                    .map_err(|e| DirectoryError::new(Stage::Cookie, e))?;
                self.fetch_json(endpoint, params, &fresh)
                    .await
                    .map_err(|e| DirectoryError::new(stage, e))
            }
            other => other.map_err(|e| DirectoryError::new(stage, e)),
        }
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        token: &str,
    ) -> Result<T, ClientError> {
        let response = self
            .session
            .request(Method::GET, endpoint, params, HeaderMap::new(), Some(token))
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ClientError::Auth {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

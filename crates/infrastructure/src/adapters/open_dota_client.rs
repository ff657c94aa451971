//! OpenDota client implementation using reqwest.
//!
//! This adapter implements the `StatsApi` port against the public OpenDota
//! REST API (or any server exposing the same paths).

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dotalens_application::ports::{StatsApi, StatsApiError};
use dotalens_domain::{ClientSettings, HeroCatalog, PlayerId};
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::serialization::parse_body;

/// Statistics API client using reqwest.
///
/// Wraps a single `reqwest::Client`, so connections are pooled across the
/// requests of a search.
#[derive(Debug, Clone)]
pub struct OpenDotaClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl OpenDotaClient {
    /// Creates a client from settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be created.
    pub fn new(settings: &ClientSettings) -> Result<Self, StatsApiError> {
        let base_url = settings
            .base_url()
            .map_err(|e| StatsApiError::InvalidUrl(e.to_string()))?;
        let timeout = Duration::from_secs(settings.request_timeout_secs);

        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(timeout)
            .build()
            .map_err(|e| StatsApiError::Other(e.to_string()))?;

        Ok(Self::with_client(client, base_url, timeout))
    }

    /// Creates a client around an existing reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, base_url: Url, timeout: Duration) -> Self {
        Self {
            client,
            base_url,
            timeout,
        }
    }

    /// Appends path segments to the base URL. Segments are percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, StatsApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| StatsApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a GET and returns the status and body bytes.
    async fn fetch(&self, url: Url) -> Result<(u16, Vec<u8>), StatsApiError> {
        let started = Instant::now();

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.map_error(e))?;
        let status = response.status().as_u16();

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_error(e))?
            .to_vec();

        debug!(
            %url,
            status,
            bytes = body.len(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "GET completed"
        );

        Ok((status, body))
    }

    /// Fetches a JSON endpoint. Non-success statuses are logged and the body
    /// is still parsed, since the API reports errors as JSON objects.
    async fn get_json(&self, segments: &[&str]) -> Result<Value, StatsApiError> {
        let url = self.endpoint(segments)?;
        let (status, body) = self.fetch(url.clone()).await?;

        if !(200..300).contains(&status) {
            warn!(%url, status, "Non-success status from statistics API");
        }

        parse_body(&body).map_err(|e| StatsApiError::InvalidJson(e.to_string()))
    }

    /// Maps reqwest errors to port errors.
    fn map_error(&self, error: reqwest::Error) -> StatsApiError {
        if error.is_timeout() {
            return StatsApiError::Timeout {
                timeout_secs: self.timeout.as_secs(),
            };
        }

        if error.is_connect() {
            return StatsApiError::Connection(error.to_string());
        }

        if error.is_builder() {
            return StatsApiError::InvalidUrl(error.to_string());
        }

        StatsApiError::Other(error.to_string())
    }
}

#[async_trait]
impl StatsApi for OpenDotaClient {
    async fn get_player_stats(&self, player_id: &PlayerId) -> Result<Value, StatsApiError> {
        self.get_json(&["players", player_id.as_str()]).await
    }

    async fn get_match_history(&self, player_id: &PlayerId) -> Result<Value, StatsApiError> {
        self.get_json(&["players", player_id.as_str(), "matches"])
            .await
    }

    async fn get_hero_catalog(&self) -> Result<HeroCatalog, StatsApiError> {
        let heroes = self.get_json(&["heroes"]).await?;
        Ok(HeroCatalog::from_response(&heroes))
    }

    async fn get_avatar(&self, url: &str) -> Result<Vec<u8>, StatsApiError> {
        let url = Url::parse(url).map_err(|e| StatsApiError::InvalidUrl(format!("{e}: {url}")))?;
        let (status, body) = self.fetch(url).await?;

        if !(200..300).contains(&status) {
            return Err(StatsApiError::Other(format!(
                "avatar request failed with status {status}"
            )));
        }

        Ok(body)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn client_for(base: &str) -> OpenDotaClient {
        OpenDotaClient::new(&ClientSettings {
            api_base_url: base.to_string(),
            ..ClientSettings::default()
        })
        .unwrap()
    }

    #[test]
    fn test_client_creation() {
        assert!(OpenDotaClient::new(&ClientSettings::default()).is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        let result = OpenDotaClient::new(&ClientSettings {
            api_base_url: "mailto:someone@example.com".to_string(),
            ..ClientSettings::default()
        });
        assert!(matches!(result, Err(StatsApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_endpoint_paths() {
        let client = client_for("https://api.opendota.com/api");

        assert_eq!(
            client.endpoint(&["players", "42"]).unwrap().as_str(),
            "https://api.opendota.com/api/players/42"
        );
        assert_eq!(
            client
                .endpoint(&["players", "42", "matches"])
                .unwrap()
                .as_str(),
            "https://api.opendota.com/api/players/42/matches"
        );
    }

    #[test]
    fn test_endpoint_with_trailing_slash() {
        let client = client_for("http://localhost:8080/api/");
        assert_eq!(
            client.endpoint(&["heroes"]).unwrap().as_str(),
            "http://localhost:8080/api/heroes"
        );
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = client_for("http://localhost:8080");
        assert_eq!(
            client.endpoint(&["players", "a/b"]).unwrap().as_str(),
            "http://localhost:8080/players/a%2Fb"
        );
    }

    #[tokio::test]
    async fn test_avatar_rejects_relative_url() {
        let client = client_for("http://localhost:8080");
        let result = client.get_avatar("/avatar.png").await;
        assert!(matches!(result, Err(StatsApiError::InvalidUrl(_))));
    }
}

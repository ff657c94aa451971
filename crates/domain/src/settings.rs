//! Client Settings Domain Model
//!
//! Defines the connection settings of the Dotalens client.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::matches::MATCH_HISTORY_LIMIT;
use crate::{DomainError, DomainResult};

/// Public OpenDota API root.
pub const DEFAULT_API_BASE_URL: &str = "https://api.opendota.com/api";

/// Settings for talking to the statistics API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// API root that endpoint paths are appended to.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum number of matches shown.
    #[serde(default = "default_match_history_limit")]
    pub match_history_limit: usize,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    30
}

const fn default_match_history_limit() -> usize {
    MATCH_HISTORY_LIMIT
}

fn default_user_agent() -> String {
    format!("Dotalens/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            match_history_limit: default_match_history_limit(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientSettings {
    /// Checks that the settings can be used to build a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute http(s) URL, or if
    /// the timeout or match limit is zero.
    pub fn validate(&self) -> DomainResult<()> {
        self.base_url()?;

        if self.request_timeout_secs == 0 {
            return Err(DomainError::InvalidSetting {
                name: "request_timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.match_history_limit == 0 {
            return Err(DomainError::InvalidSetting {
                name: "match_history_limit",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Parses the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBaseUrl` if the URL does not parse or does
    /// not use http or https.
    pub fn base_url(&self) -> DomainResult<Url> {
        let url = Url::parse(&self.api_base_url)
            .map_err(|e| DomainError::InvalidBaseUrl(format!("{e}: {}", self.api_base_url)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(DomainError::InvalidBaseUrl(format!(
                "unsupported scheme `{other}`: {}",
                self.api_base_url
            ))),
        }
    }
}

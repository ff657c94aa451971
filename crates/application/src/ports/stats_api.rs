//! Statistics API port
//!
//! Defines the interface to the remote player statistics service.

use async_trait::async_trait;
use dotalens_domain::{HeroCatalog, PlayerId, SearchErrorKind};
use serde_json::Value;

/// Errors that can occur when calling the statistics API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsApiError {
    /// The request did not complete in time.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// The server could not be reached.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The endpoint URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The response body is not valid JSON.
    #[error("response is not valid JSON: {0}")]
    InvalidJson(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

impl StatsApiError {
    /// Maps this error to a display category.
    #[must_use]
    pub const fn to_error_kind(&self) -> SearchErrorKind {
        match self {
            Self::Timeout { .. } => SearchErrorKind::Timeout,
            Self::Connection(_) => SearchErrorKind::ConnectionFailed,
            Self::InvalidUrl(_) => SearchErrorKind::InvalidUrl,
            Self::InvalidJson(_) => SearchErrorKind::InvalidResponse,
            Self::Other(_) => SearchErrorKind::Unknown,
        }
    }
}

/// Port for the player statistics service.
///
/// JSON endpoints return the parsed body regardless of the HTTP status,
/// since the service reports problems as JSON error objects.
#[async_trait]
pub trait StatsApi: Send + Sync {
    /// Fetches the player document (`/players/{id}`).
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-JSON body.
    async fn get_player_stats(&self, player_id: &PlayerId) -> Result<Value, StatsApiError>;

    /// Fetches the player's match list (`/players/{id}/matches`).
    ///
    /// The result is an array on success or an error object otherwise.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-JSON body.
    async fn get_match_history(&self, player_id: &PlayerId) -> Result<Value, StatsApiError>;

    /// Fetches the full hero catalog (`/heroes`).
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-JSON body.
    async fn get_hero_catalog(&self) -> Result<HeroCatalog, StatsApiError>;

    /// Downloads raw avatar image bytes.
    ///
    /// # Errors
    /// Returns an error on transport failure.
    async fn get_avatar(&self, url: &str) -> Result<Vec<u8>, StatsApiError>;

    /// Looks up a single hero name, `None` if the id is unknown.
    ///
    /// Fetches the whole catalog; prefer [`StatsApi::get_hero_catalog`] when
    /// resolving several heroes.
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be fetched.
    async fn get_hero_name(&self, hero_id: u32) -> Result<Option<String>, StatsApiError> {
        let catalog = self.get_hero_catalog().await?;
        Ok(catalog.name(hero_id).map(str::to_string))
    }
}

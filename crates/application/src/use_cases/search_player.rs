//! Search player use case
//!
//! Runs one search: profile, avatar, match history and hero names.

use std::sync::Arc;

use dotalens_domain::{
    HeroCatalog, MATCH_HISTORY_LIMIT, MatchRow, PlayerId, PlayerProfile, recent_matches,
};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::ApplicationResult;
use crate::ports::{StatsApi, StatsApiError};

/// Everything displayed for a found player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerReport {
    /// The searched id.
    pub player_id: PlayerId,
    /// Profile fields.
    pub profile: PlayerProfile,
    /// Encoded avatar image, if one was listed and could be downloaded.
    pub avatar: Option<Vec<u8>>,
    /// Match rows in response order, `None` if the match list was not an
    /// array or could not be fetched.
    pub matches: Option<Vec<MatchRow>>,
    /// Why the match list request failed, if it did.
    pub history_error: Option<StatsApiError>,
}

/// Result of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The player exists.
    Found(Box<PlayerReport>),
    /// The input was not an id or the API has no profile for it.
    InvalidPlayer,
}

/// Use case for looking up a player.
pub struct SearchPlayer<A: StatsApi> {
    api: Arc<A>,
    match_limit: usize,
}

impl<A: StatsApi> SearchPlayer<A> {
    /// Creates a new `SearchPlayer` use case showing up to
    /// [`MATCH_HISTORY_LIMIT`] matches.
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            match_limit: MATCH_HISTORY_LIMIT,
        }
    }

    /// Overrides the number of matches shown.
    #[must_use]
    pub fn with_match_limit(mut self, limit: usize) -> Self {
        self.match_limit = limit;
        self
    }

    /// Executes the search for the raw text typed by the user.
    ///
    /// Steps, stopping at the first that decides the outcome:
    /// 1. parse the id (`InvalidPlayer` on failure)
    /// 2. fetch the profile (`InvalidPlayer` without the `profile` marker)
    /// 3. download the avatar; failure only drops the avatar
    /// 4. fetch the match list and, if it is an array, resolve hero names
    ///    with a single catalog fetch; a failed request keeps the profile and
    ///    is reported in [`PlayerReport::history_error`]
    ///
    /// # Errors
    ///
    /// Returns an error if the profile request fails.
    pub async fn execute(&self, input: &str) -> ApplicationResult<SearchOutcome> {
        let Ok(player_id) = PlayerId::parse(input) else {
            info!(input, "Rejected malformed player id");
            return Ok(SearchOutcome::InvalidPlayer);
        };

        let stats = self.api.get_player_stats(&player_id).await?;
        let Some(profile) = PlayerProfile::from_response(&stats) else {
            info!(%player_id, "No profile returned for player");
            return Ok(SearchOutcome::InvalidPlayer);
        };

        let avatar = self.fetch_avatar(&profile).await;

        let (matches, history_error) = match self.api.get_match_history(&player_id).await {
            Ok(history) => (self.build_rows(&player_id, &history).await, None),
            Err(e) => {
                warn!(%player_id, error = %e, "Failed to fetch match history");
                (None, Some(e))
            }
        };

        info!(
            %player_id,
            matches = matches.as_ref().map(Vec::len),
            has_avatar = avatar.is_some(),
            "Player search finished"
        );

        Ok(SearchOutcome::Found(Box::new(PlayerReport {
            player_id,
            profile,
            avatar,
            matches,
            history_error,
        })))
    }

    async fn build_rows(&self, player_id: &PlayerId, history: &Value) -> Option<Vec<MatchRow>> {
        match recent_matches(history, self.match_limit) {
            Some(summaries) => {
                let heroes = if summaries.is_empty() {
                    HeroCatalog::default()
                } else {
                    self.fetch_heroes().await
                };
                Some(
                    summaries
                        .iter()
                        .map(|summary| MatchRow::from_summary(summary, &heroes))
                        .collect::<Vec<_>>(),
                )
            }
            None => {
                warn!(%player_id, "Match history response is not a list");
                None
            }
        }
    }

    async fn fetch_avatar(&self, profile: &PlayerProfile) -> Option<Vec<u8>> {
        let url = profile.avatar_url.as_deref()?;
        match self.api.get_avatar(url).await {
            Ok(bytes) => {
                debug!(url, bytes = bytes.len(), "Downloaded avatar");
                Some(bytes)
            }
            Err(e) => {
                warn!(url, error = %e, "Failed to download avatar");
                None
            }
        }
    }

    async fn fetch_heroes(&self) -> HeroCatalog {
        match self.api.get_hero_catalog().await {
            Ok(catalog) => {
                debug!(heroes = catalog.len(), "Fetched hero catalog");
                catalog
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch hero catalog");
                HeroCatalog::default()
            }
        }
    }
}

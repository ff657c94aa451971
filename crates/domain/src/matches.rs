//! Match history model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::hero::HeroCatalog;

/// Maximum number of matches shown for a player.
pub const MATCH_HISTORY_LIMIT: usize = 20;

/// Outcome of a match as shown in the Result column.
///
/// Derived from `radiant_win` only; the player's own side is not considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Radiant lost.
    Loss,
    /// Radiant won.
    Win,
}

impl MatchOutcome {
    /// Maps the `radiant_win` flag to an outcome.
    #[must_use]
    pub const fn from_radiant_win(radiant_win: bool) -> Self {
        if radiant_win { Self::Win } else { Self::Loss }
    }

    /// Label shown in the table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Loss => "Loss",
        }
    }
}

/// One entry of a player's match list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Match id.
    pub match_id: Option<u64>,
    /// Hero the player picked.
    pub hero_id: Option<u32>,
    /// Match length in seconds.
    pub duration_secs: Option<u32>,
    /// Whether Radiant won.
    pub radiant_win: Option<bool>,
}

impl MatchSummary {
    /// Extracts a summary from one element of the matches response.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let small = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok())
        };

        Self {
            match_id: value.get("match_id").and_then(Value::as_u64),
            hero_id: small("hero_id"),
            duration_secs: small("duration"),
            radiant_win: value.get("radiant_win").and_then(Value::as_bool),
        }
    }

    /// Outcome of this match, if the flag was reported.
    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.radiant_win.map(MatchOutcome::from_radiant_win)
    }
}

/// Takes the first `limit` matches of a matches response, in response order.
///
/// Returns `None` if the response is not a JSON array (the API answers with
/// an error object in that case).
#[must_use]
pub fn recent_matches(response: &Value, limit: usize) -> Option<Vec<MatchSummary>> {
    let entries = response.as_array()?;
    Some(entries.iter().take(limit).map(MatchSummary::from_value).collect())
}

/// Formats a duration in seconds as `minutes:seconds`, e.g. 125 -> `2:05`.
#[must_use]
pub fn format_duration(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// A match prepared for the history table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRow {
    /// Match id.
    pub match_id: Option<u64>,
    /// Resolved hero name.
    pub hero_name: String,
    /// Match length in seconds.
    pub duration_secs: Option<u32>,
    /// Win or loss.
    pub outcome: Option<MatchOutcome>,
}

impl MatchRow {
    /// Builds a row, resolving the hero name through the catalog.
    #[must_use]
    pub fn from_summary(summary: &MatchSummary, heroes: &HeroCatalog) -> Self {
        Self {
            match_id: summary.match_id,
            hero_name: heroes.display_name(summary.hero_id).to_string(),
            duration_secs: summary.duration_secs,
            outcome: summary.outcome(),
        }
    }

    /// Match ID cell text.
    #[must_use]
    pub fn match_id_text(&self) -> String {
        self.match_id.map(|id| id.to_string()).unwrap_or_default()
    }

    /// Duration cell text.
    #[must_use]
    pub fn duration_text(&self) -> String {
        self.duration_secs.map(format_duration).unwrap_or_default()
    }

    /// Result cell text.
    #[must_use]
    pub fn result_text(&self) -> &'static str {
        self.outcome.map_or("", MatchOutcome::label)
    }
}

//! Search execution state types for UI binding.

use serde::{Deserialize, Serialize};

/// Represents the current state of a player search in the UI.
///
/// - `Idle`: nothing searched yet
/// - `Loading`: requests in flight, search button disabled
/// - `Loaded`: profile (and possibly matches) displayed
/// - `Error`: the search failed, an error dialog is shown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchState {
    /// No search has been made yet.
    #[default]
    Idle,

    /// Search is in progress.
    Loading {
        /// The id being searched.
        player_id: String,
    },

    /// Search completed and results are on screen.
    Loaded {
        /// Number of match rows displayed, `None` if the table was left untouched.
        match_count: Option<usize>,
    },

    /// Search failed.
    Error {
        /// Error category for display.
        kind: SearchErrorKind,
        /// Human-readable error message.
        message: String,
    },
}

impl SearchState {
    /// Creates a Loading state.
    #[must_use]
    pub fn loading(player_id: impl Into<String>) -> Self {
        Self::Loading {
            player_id: player_id.into(),
        }
    }

    /// Creates an Error state.
    #[must_use]
    pub fn error(kind: SearchErrorKind, message: impl Into<String>) -> Self {
        Self::Error {
            kind,
            message: message.into(),
        }
    }

    /// Returns true if a search is in progress.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Short status line shown under the search button.
    #[must_use]
    pub fn status_text(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Loading { player_id } => format!("Searching for player {player_id}..."),
            Self::Loaded {
                match_count: Some(count),
            } => format!("Showing {count} recent matches"),
            Self::Loaded { match_count: None } => "Match history unavailable".to_string(),
            Self::Error { kind, .. } => kind.title().to_string(),
        }
    }
}

/// Message shown when the id is malformed or has no profile.
pub const INVALID_PLAYER_MESSAGE: &str = "Invalid player ID.";

/// Categories of search errors for user-friendly display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchErrorKind {
    /// The id is malformed or the API has no profile for it.
    InvalidPlayer,

    /// The request timed out.
    Timeout,

    /// Could not reach the API.
    ConnectionFailed,

    /// The API answered with something that is not JSON.
    InvalidResponse,

    /// The configured API URL is unusable.
    InvalidUrl,

    /// Unknown or unexpected error.
    Unknown,
}

impl SearchErrorKind {
    /// Returns a short title for this error type.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::InvalidPlayer => "Error",
            Self::Timeout => "Request Timeout",
            Self::ConnectionFailed => "Connection Failed",
            Self::InvalidResponse => "Invalid Response",
            Self::InvalidUrl => "Invalid API URL",
            Self::Unknown => "Request Failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SearchState::default(), SearchState::Idle);
        assert_eq!(SearchState::Idle.status_text(), "");
    }

    #[test]
    fn test_loading() {
        let state = SearchState::loading("42");
        assert!(state.is_loading());
        assert_eq!(state.status_text(), "Searching for player 42...");
    }

    #[test]
    fn test_loaded_status() {
        let state = SearchState::Loaded {
            match_count: Some(20),
        };
        assert!(!state.is_loading());
        assert_eq!(state.status_text(), "Showing 20 recent matches");
    }

    #[test]
    fn test_error_status_uses_title() {
        let state = SearchState::error(SearchErrorKind::Timeout, "timed out after 30s");
        assert_eq!(state.status_text(), "Request Timeout");
    }

    #[test]
    fn test_serialization_tag() {
        let json = serde_json::to_string(&SearchState::Idle).unwrap_or_default();
        assert_eq!(json, r#"{"state":"idle"}"#);
    }
}

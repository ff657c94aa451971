//! UI Bridge Module
//!
//! Defines the communication protocol between the Slint UI thread
//! and the async Tokio runtime.

use dotalens_domain::{MatchRow, ProfileField, SearchState, SortState};
use dotalens_infrastructure::AvatarImage;

/// Commands sent from UI to the async runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// User clicked the search button or pressed Enter in the id field.
    Search { player_id: String },

    /// User clicked a column header of the match table.
    HeaderClicked { column: i32 },
}

/// Updates sent from the async runtime to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiUpdate {
    /// Search state changed.
    State(SearchState),

    /// Replace the profile panel.
    Profile {
        lines: Vec<ProfileLineData>,
        avatar: Option<AvatarImage>,
    },

    /// Replace the match table rows.
    MatchRows(Vec<MatchRowData>),

    /// Move the header sort indicator; `column` is -1 to hide it.
    SortIndicator { column: i32, ascending: bool },

    /// Show the error dialog.
    Error { title: String, message: String },
}

impl UiUpdate {
    /// Builds the indicator update for a sort state.
    #[must_use]
    pub fn sort_indicator(sort: &SortState) -> Self {
        match sort.active() {
            Some((column, order)) => Self::SortIndicator {
                column: column.to_index(),
                ascending: order.is_ascending(),
            },
            None => Self::SortIndicator {
                column: -1,
                ascending: false,
            },
        }
    }
}

/// Profile line data for UI display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileLineData {
    pub label: String,
    pub value: String,
}

impl From<ProfileField> for ProfileLineData {
    fn from(field: ProfileField) -> Self {
        Self {
            label: field.label,
            value: field.value,
        }
    }
}

/// Match table row data for UI display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRowData {
    pub match_id: String,
    pub hero: String,
    pub duration: String,
    pub result: String,
}

impl From<&MatchRow> for MatchRowData {
    fn from(row: &MatchRow) -> Self {
        Self {
            match_id: row.match_id_text(),
            hero: row.hero_name.clone(),
            duration: row.duration_text(),
            result: row.result_text().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotalens_domain::{MatchColumn, MatchOutcome};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_row_data_from_match_row() {
        let row = MatchRow {
            match_id: Some(7_123_456_789),
            hero_name: "Pudge".to_string(),
            duration_secs: Some(125),
            outcome: Some(MatchOutcome::Win),
        };

        assert_eq!(
            MatchRowData::from(&row),
            MatchRowData {
                match_id: "7123456789".to_string(),
                hero: "Pudge".to_string(),
                duration: "2:05".to_string(),
                result: "Win".to_string(),
            }
        );
    }

    #[test]
    fn test_sort_indicator() {
        let mut sort = SortState::new();
        assert_eq!(
            UiUpdate::sort_indicator(&sort),
            UiUpdate::SortIndicator {
                column: -1,
                ascending: false
            }
        );

        sort.toggle(MatchColumn::Hero);
        assert_eq!(
            UiUpdate::sort_indicator(&sort),
            UiUpdate::SortIndicator {
                column: 1,
                ascending: true
            }
        );

        sort.toggle(MatchColumn::Hero);
        assert_eq!(
            UiUpdate::sort_indicator(&sort),
            UiUpdate::SortIndicator {
                column: 1,
                ascending: false
            }
        );
    }
}

//! Match table columns and sort toggling.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::matches::MatchRow;

/// Columns of the match history table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchColumn {
    /// Match id.
    MatchId,
    /// Hero name.
    Hero,
    /// Duration.
    Duration,
    /// Win/Loss.
    Result,
}

impl MatchColumn {
    /// All columns in display order.
    pub const ALL: [Self; 4] = [Self::MatchId, Self::Hero, Self::Duration, Self::Result];

    /// Create from the UI column index.
    #[must_use]
    pub const fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Self::MatchId),
            1 => Some(Self::Hero),
            2 => Some(Self::Duration),
            3 => Some(Self::Result),
            _ => None,
        }
    }

    /// Convert to the UI column index.
    #[must_use]
    pub const fn to_index(self) -> i32 {
        match self {
            Self::MatchId => 0,
            Self::Hero => 1,
            Self::Duration => 2,
            Self::Result => 3,
        }
    }

    /// Header title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::MatchId => "Match ID",
            Self::Hero => "Hero",
            Self::Duration => "Duration",
            Self::Result => "Result",
        }
    }

    /// Order applied the first time this column is clicked.
    ///
    /// Names read naturally A to Z; numbers and results start with the
    /// largest value.
    #[must_use]
    pub const fn initial_order(self) -> SortOrder {
        match self {
            Self::Hero => SortOrder::Ascending,
            Self::MatchId | Self::Duration | Self::Result => SortOrder::Descending,
        }
    }

    fn compare(self, a: &MatchRow, b: &MatchRow) -> Ordering {
        match self {
            Self::MatchId => a.match_id.cmp(&b.match_id),
            Self::Hero => a
                .hero_name
                .to_lowercase()
                .cmp(&b.hero_name.to_lowercase()),
            Self::Duration => a.duration_secs.cmp(&b.duration_secs),
            Self::Result => a.outcome.cmp(&b.outcome),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Returns true for ascending order.
    #[must_use]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }
}

/// Which column the table is sorted by, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    active: Option<(MatchColumn, SortOrder)>,
}

impl SortState {
    /// Creates an unsorted state.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Handles a click on a column header and returns the new order.
    ///
    /// Clicking the sorted column flips its order; clicking another column
    /// starts at that column's [`MatchColumn::initial_order`].
    pub fn toggle(&mut self, column: MatchColumn) -> SortOrder {
        let order = match self.active {
            Some((current, order)) if current == column => order.flipped(),
            _ => column.initial_order(),
        };
        self.active = Some((column, order));
        order
    }

    /// Forgets the sorted column.
    pub fn reset(&mut self) {
        self.active = None;
    }

    /// The sorted column and its order.
    #[must_use]
    pub const fn active(&self) -> Option<(MatchColumn, SortOrder)> {
        self.active
    }
}

/// Stable-sorts rows by a column. Blank cells come first in ascending order.
pub fn sort_rows(rows: &mut [MatchRow], column: MatchColumn, order: SortOrder) {
    rows.sort_by(|a, b| {
        let ordering = column.compare(a, b);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matches::MatchOutcome;
    use pretty_assertions::assert_eq;

    fn row(match_id: u64, hero: &str, duration_secs: u32, win: bool) -> MatchRow {
        MatchRow {
            match_id: Some(match_id),
            hero_name: hero.to_string(),
            duration_secs: Some(duration_secs),
            outcome: Some(MatchOutcome::from_radiant_win(win)),
        }
    }

    fn sample_rows() -> Vec<MatchRow> {
        vec![
            row(2, "axe", 600, true),
            row(10, "Bane", 3599, false),
            row(1, "Zeus", 61, true),
        ]
    }

    #[test]
    fn test_non_hero_column_starts_descending_then_flips() {
        let mut state = SortState::new();
        assert_eq!(state.toggle(MatchColumn::Duration), SortOrder::Descending);
        assert_eq!(state.toggle(MatchColumn::Duration), SortOrder::Ascending);
        assert_eq!(state.toggle(MatchColumn::Duration), SortOrder::Descending);
    }

    #[test]
    fn test_hero_column_starts_ascending_then_flips() {
        let mut state = SortState::new();
        assert_eq!(state.toggle(MatchColumn::Hero), SortOrder::Ascending);
        assert_eq!(state.toggle(MatchColumn::Hero), SortOrder::Descending);
    }

    #[test]
    fn test_switching_columns_uses_initial_order() {
        let mut state = SortState::new();
        state.toggle(MatchColumn::Hero);
        state.toggle(MatchColumn::Hero);
        assert_eq!(state.toggle(MatchColumn::MatchId), SortOrder::Descending);
        assert_eq!(state.toggle(MatchColumn::Hero), SortOrder::Ascending);
        assert_eq!(
            state.active(),
            Some((MatchColumn::Hero, SortOrder::Ascending))
        );

        state.reset();
        assert_eq!(state.active(), None);
    }

    #[test]
    fn test_sort_numeric_columns_by_value() {
        let mut rows = sample_rows();
        sort_rows(&mut rows, MatchColumn::MatchId, SortOrder::Descending);
        let ids: Vec<_> = rows.iter().map(|r| r.match_id).collect();
        assert_eq!(ids, vec![Some(10), Some(2), Some(1)]);

        sort_rows(&mut rows, MatchColumn::Duration, SortOrder::Ascending);
        let durations: Vec<_> = rows.iter().map(MatchRow::duration_text).collect();
        assert_eq!(durations, vec!["1:01", "10:00", "59:59"]);
    }

    #[test]
    fn test_sort_hero_ignores_case() {
        let mut rows = sample_rows();
        sort_rows(&mut rows, MatchColumn::Hero, SortOrder::Ascending);
        let heroes: Vec<_> = rows.iter().map(|r| r.hero_name.as_str()).collect();
        assert_eq!(heroes, vec!["axe", "Bane", "Zeus"]);
    }

    #[test]
    fn test_sort_result_is_stable() {
        let mut rows = sample_rows();
        sort_rows(&mut rows, MatchColumn::Result, SortOrder::Descending);
        let ids: Vec<_> = rows.iter().map(|r| r.match_id).collect();
        assert_eq!(ids, vec![Some(2), Some(1), Some(10)]);
    }

    #[test]
    fn test_blank_cells_sort_first_ascending() {
        let mut rows = sample_rows();
        rows.push(MatchRow {
            match_id: None,
            hero_name: String::new(),
            duration_secs: None,
            outcome: None,
        });
        sort_rows(&mut rows, MatchColumn::Duration, SortOrder::Ascending);
        assert_eq!(rows[0].duration_secs, None);
    }

    #[test]
    fn test_column_index_round_trip() {
        for column in MatchColumn::ALL {
            assert_eq!(MatchColumn::from_index(column.to_index()), Some(column));
        }
        assert_eq!(MatchColumn::from_index(4), None);
        assert_eq!(MatchColumn::from_index(-1), None);
    }

    #[test]
    fn test_header_titles_follow_column_order() {
        let titles: Vec<&str> = MatchColumn::ALL.iter().map(|c| c.title()).collect();
        assert_eq!(titles, vec!["Match ID", "Hero", "Duration", "Result"]);

        for (index, column) in MatchColumn::ALL.iter().enumerate() {
            assert_eq!(usize::try_from(column.to_index()).ok(), Some(index));
        }
    }
}

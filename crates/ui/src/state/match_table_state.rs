//! UI state for the match history table.

use dotalens_domain::{MatchColumn, MatchRow, SortOrder, SortState, sort_rows};

use crate::bridge::MatchRowData;

/// Rows currently displayed and the column they are sorted by.
#[derive(Debug, Clone, Default)]
pub struct MatchTableState {
    rows: Vec<MatchRow>,
    sort: SortState,
}

impl MatchTableState {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the rows with a new search result. The rows keep response
    /// order and the sort indicator is cleared.
    pub fn replace_rows(&mut self, rows: Vec<MatchRow>) {
        self.rows = rows;
        self.sort.reset();
    }

    /// Sorts by the clicked header. Returns the new order, or `None` for an
    /// index that is not a column.
    pub fn header_clicked(&mut self, index: i32) -> Option<SortOrder> {
        let column = MatchColumn::from_index(index)?;
        let order = self.sort.toggle(column);
        sort_rows(&mut self.rows, column, order);
        Some(order)
    }

    /// Rows formatted for display, in current order.
    #[must_use]
    pub fn row_data(&self) -> Vec<MatchRowData> {
        self.rows.iter().map(MatchRowData::from).collect()
    }

    /// Sort state for the header indicator.
    #[must_use]
    pub const fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no rows are displayed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

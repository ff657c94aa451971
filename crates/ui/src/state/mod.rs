//! UI state management module.

mod match_table_state;

pub use match_table_state::MatchTableState;

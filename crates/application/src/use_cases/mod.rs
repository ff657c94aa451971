//! Use case implementations.

mod search_player;

pub use search_player::{PlayerReport, SearchOutcome, SearchPlayer};

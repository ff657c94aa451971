//! Dotalens Domain - Core business types
//!
//! This crate defines the domain model for the Dotalens player statistics
//! client. All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod hero;
pub mod matches;
pub mod player;
pub mod profile;
pub mod settings;
pub mod state;
pub mod table;

pub use error::{DomainError, DomainResult};
pub use hero::{Hero, HeroCatalog, UNKNOWN_HERO};
pub use matches::{
    MATCH_HISTORY_LIMIT, MatchOutcome, MatchRow, MatchSummary, format_duration, recent_matches,
};
pub use player::PlayerId;
pub use profile::{Medal, PlayerProfile, ProfileField, RankTier};
pub use settings::{ClientSettings, DEFAULT_API_BASE_URL};
pub use state::{INVALID_PLAYER_MESSAGE, SearchErrorKind, SearchState};
pub use table::{MatchColumn, SortOrder, SortState, sort_rows};

//! Dotalens Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for external dependencies)
//! - Use case orchestration
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{StatsApi, StatsApiError};
pub use use_cases::{PlayerReport, SearchOutcome, SearchPlayer};

//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The player identifier is empty or not numeric.
    #[error("invalid player id: {0:?}")]
    InvalidPlayerId(String),

    /// The configured API base URL is invalid or malformed.
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// A settings value is out of range.
    #[error("invalid setting `{name}`: {reason}")]
    InvalidSetting {
        /// Name of the offending setting.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

//! Application error types

use dotalens_domain::{DomainError, SearchErrorKind};
use thiserror::Error;

use crate::ports::StatsApiError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A call to the statistics API failed.
    #[error(transparent)]
    Api(#[from] StatsApiError),
}

impl ApplicationError {
    /// Returns the display category of this error.
    #[must_use]
    pub const fn kind(&self) -> SearchErrorKind {
        match self {
            Self::Domain(DomainError::InvalidPlayerId(_)) => SearchErrorKind::InvalidPlayer,
            Self::Domain(DomainError::InvalidBaseUrl(_)) => SearchErrorKind::InvalidUrl,
            Self::Domain(DomainError::InvalidSetting { .. }) => SearchErrorKind::Unknown,
            Self::Api(e) => e.to_error_kind(),
        }
    }
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

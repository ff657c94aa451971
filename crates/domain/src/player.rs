//! Player identifier

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DomainError, DomainResult};

/// OpenDota account identifier as typed by the user.
///
/// Only the decimal digits of the 32-bit account id are accepted; the value
/// is kept as text because it is only ever embedded in a URL path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Parses user input into a player id, ignoring surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPlayerId` if the input is empty or contains
    /// anything other than ASCII digits.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidPlayerId(input.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PlayerId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_trims_whitespace() {
        let id = PlayerId::parse("  86745912 \n").unwrap();
        assert_eq!(id.as_str(), "86745912");
        assert_eq!(id.to_string(), "86745912");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(PlayerId::parse("").is_err());
        assert!(PlayerId::parse("   ").is_err());
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        let err = "12ab".parse::<PlayerId>().unwrap_err();
        assert_eq!(err, DomainError::InvalidPlayerId("12ab".to_string()));
        assert!(PlayerId::parse("-5").is_err());
        assert!(PlayerId::parse("1 2").is_err());
    }
}

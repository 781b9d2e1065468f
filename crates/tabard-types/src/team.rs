//! validated team identifier type.
//!
//! team names must:
//! - Be 1-50 characters long
//! - Contain only lowercase alphanumeric characters (hyphens/underscores allowed)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// maximum length for a team name.
pub const MAX_TEAM_NAME_LEN: usize = 50;

/// a validated team name (e.g., "moderation").
///
/// teams grant scoped privileges independent of the global role rank;
/// membership is resolved by the external membership store before an
/// actor snapshot is constructed.
///
/// # Example
/// ```
/// use tabard_types::TeamId;
///
/// let team: TeamId = "moderation".parse().unwrap();
/// assert_eq!(team.as_str(), "moderation");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamId(String);

impl TeamId {
    /// create a new team id, validating the format.
    pub fn new(s: impl Into<String>) -> Result<Self, TeamIdError> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// get the team name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// consume the team id and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }

    fn validate(s: &str) -> Result<(), TeamIdError> {
        if s.is_empty() {
            return Err(TeamIdError::Empty);
        }

        if s.len() > MAX_TEAM_NAME_LEN {
            return Err(TeamIdError::TooLong(s.len()));
        }

        if !s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            return Err(TeamIdError::InvalidCharacters);
        }

        Ok(())
    }
}

impl AsRef<str> for TeamId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TeamId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TeamId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = TeamIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// serde: deserialize with validation
impl<'de> Deserialize<'de> for TeamId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TeamId::new(s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for TeamId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

/// error type for team id validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TeamIdError {
    /// team name cannot be empty.
    #[error("team name cannot be empty")]
    Empty,
    /// team name exceeds maximum length.
    #[error("team name too long ({0} chars, max {MAX_TEAM_NAME_LEN})")]
    TooLong(usize),
    /// team name contains invalid characters.
    #[error("team name must be lowercase alphanumeric with hyphens or underscores")]
    InvalidCharacters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_teams() {
        assert!(TeamId::new("moderation").is_ok());
        assert!(TeamId::new("story-tellers").is_ok());
        assert!(TeamId::new("map_makers").is_ok());
        assert!(TeamId::new("crew42").is_ok());
        assert!(TeamId::new("a").is_ok());
    }

    #[test]
    fn test_invalid_teams() {
        assert_eq!(TeamId::new("").unwrap_err(), TeamIdError::Empty);
        assert_eq!(
            TeamId::new("Moderation").unwrap_err(),
            TeamIdError::InvalidCharacters
        );
        assert_eq!(
            TeamId::new("has spaces").unwrap_err(),
            TeamIdError::InvalidCharacters
        );
    }

    #[test]
    fn test_team_too_long() {
        let long = "a".repeat(MAX_TEAM_NAME_LEN + 1);
        assert!(matches!(
            TeamId::new(long).unwrap_err(),
            TeamIdError::TooLong(_)
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let team = TeamId::new("moderation").unwrap();
        let json = serde_json::to_string(&team).unwrap();
        assert_eq!(json, "\"moderation\"");

        let parsed: TeamId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, team);
    }

    #[test]
    fn test_serde_invalid() {
        let result: Result<TeamId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}

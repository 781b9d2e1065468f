//! the global role hierarchy.
//!
//! every account holds exactly one role rank. Ranks form a total order
//! from least to most trusted, and authorization checks compare ranks
//! by ordinal position only - never by name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// an actor's position in the global trust hierarchy.
///
/// variants are declared lowest to highest so the derived [`Ord`] is the
/// authorization order. Comparison goes through the ordinal, which removes
/// the old failure mode of matching rank names against a lookup table and
/// silently treating a typo as "lower than everything".
///
/// # Example
/// ```
/// use tabard_types::RoleRank;
///
/// assert!(RoleRank::Admin.at_least(RoleRank::Moderator));
/// assert!(!RoleRank::Player.at_least(RoleRank::Staff));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RoleRank {
    /// locked out of everything except open surfaces.
    Banned,
    /// a regular participant.
    Player,
    /// trusted helper, below the moderation team.
    Staff,
    /// moderation powers over player content.
    Moderator,
    /// admin powers minus destructive operations.
    AssistantAdmin,
    /// full application administration.
    Admin,
    /// unrestricted, including admin management.
    SystemAdmin,
}

impl RoleRank {
    /// all ranks, lowest to highest.
    pub const ALL: [RoleRank; 7] = [
        RoleRank::Banned,
        RoleRank::Player,
        RoleRank::Staff,
        RoleRank::Moderator,
        RoleRank::AssistantAdmin,
        RoleRank::Admin,
        RoleRank::SystemAdmin,
    ];

    /// ordinal index of this rank (0 = least trusted).
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// true iff this rank is at least as trusted as `required`.
    pub fn at_least(self, required: RoleRank) -> bool {
        self.rank() >= required.rank()
    }

    /// the canonical string name (e.g., "assistant-admin").
    pub fn as_str(self) -> &'static str {
        match self {
            RoleRank::Banned => "banned",
            RoleRank::Player => "player",
            RoleRank::Staff => "staff",
            RoleRank::Moderator => "moderator",
            RoleRank::AssistantAdmin => "assistant-admin",
            RoleRank::Admin => "admin",
            RoleRank::SystemAdmin => "system-admin",
        }
    }
}

impl fmt::Display for RoleRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoleRank {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "banned" => Ok(RoleRank::Banned),
            "player" => Ok(RoleRank::Player),
            "staff" => Ok(RoleRank::Staff),
            "moderator" => Ok(RoleRank::Moderator),
            "assistant-admin" => Ok(RoleRank::AssistantAdmin),
            "admin" => Ok(RoleRank::Admin),
            "system-admin" => Ok(RoleRank::SystemAdmin),
            other => Err(RoleError::Unknown(other.to_string())),
        }
    }
}

// serde: deserialize with validation so unknown rank names are rejected
// at the boundary instead of reaching an authorization check
impl<'de> Deserialize<'de> for RoleRank {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for RoleRank {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// error type for role rank parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoleError {
    /// the string names no rank in the hierarchy.
    #[error("unknown role rank: {0}")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering() {
        assert!(RoleRank::Banned < RoleRank::Player);
        assert!(RoleRank::Player < RoleRank::Staff);
        assert!(RoleRank::Staff < RoleRank::Moderator);
        assert!(RoleRank::Moderator < RoleRank::AssistantAdmin);
        assert!(RoleRank::AssistantAdmin < RoleRank::Admin);
        assert!(RoleRank::Admin < RoleRank::SystemAdmin);
    }

    #[test]
    fn test_at_least() {
        assert!(RoleRank::Admin.at_least(RoleRank::Moderator));
        assert!(RoleRank::Moderator.at_least(RoleRank::Moderator));
        assert!(!RoleRank::Player.at_least(RoleRank::Staff));
        assert!(!RoleRank::Banned.at_least(RoleRank::Player));
    }

    #[test]
    fn test_rank_ordinals_match_declaration_order() {
        for (i, role) in RoleRank::ALL.iter().enumerate() {
            assert_eq!(role.rank() as usize, i);
        }
    }

    #[test]
    fn test_parse_all_names() {
        for role in RoleRank::ALL {
            let parsed: RoleRank = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "wizard".parse::<RoleRank>().unwrap_err();
        assert_eq!(err, RoleError::Unknown("wizard".to_string()));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Admin".parse::<RoleRank>().is_err());
        assert!("ADMIN".parse::<RoleRank>().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&RoleRank::AssistantAdmin).unwrap();
        assert_eq!(json, "\"assistant-admin\"");

        let parsed: RoleRank = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, RoleRank::AssistantAdmin);
    }

    #[test]
    fn test_serde_unknown_rejected() {
        let result: Result<RoleRank, _> = serde_json::from_str("\"superuser\"");
        assert!(result.is_err());
    }
}

//! security clearance tiers.
//!
//! clearance is a numeric, administratively assigned access threshold
//! attached to organizations and documents. It is separate from the role
//! hierarchy: a high rank does not imply a high tier, and tiers are never
//! derived from ranks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// a non-negative clearance tier; higher means more access.
///
/// a record without an assigned tier is treated as tier 0 (no clearance
/// requirement), which is what [`Default`] produces.
///
/// # Example
/// ```
/// use tabard_types::ClearanceTier;
///
/// assert!(ClearanceTier(4).covers(ClearanceTier(3)));
/// assert!(ClearanceTier(3).covers(ClearanceTier(3)));
/// assert!(!ClearanceTier(2).covers(ClearanceTier(3)));
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ClearanceTier(pub u32);

impl ClearanceTier {
    /// tier 0 - no clearance requirement.
    pub const NONE: ClearanceTier = ClearanceTier(0);

    /// true iff this tier satisfies `required`.
    ///
    /// monotonic: any tier at or above the requirement is sufficient,
    /// never an exact match.
    pub fn covers(self, required: ClearanceTier) -> bool {
        self >= required
    }
}

impl From<u32> for ClearanceTier {
    fn from(tier: u32) -> Self {
        Self(tier)
    }
}

impl fmt::Display for ClearanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_is_monotonic() {
        let required = ClearanceTier(3);
        assert!(!ClearanceTier(2).covers(required));
        assert!(ClearanceTier(3).covers(required));
        assert!(ClearanceTier(4).covers(required));
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(ClearanceTier::default(), ClearanceTier::NONE);
        assert_eq!(ClearanceTier::NONE.0, 0);
    }

    #[test]
    fn test_any_tier_covers_none() {
        assert!(ClearanceTier(0).covers(ClearanceTier::NONE));
        assert!(ClearanceTier(9).covers(ClearanceTier::NONE));
    }

    #[test]
    fn test_serde_is_plain_integer() {
        let json = serde_json::to_string(&ClearanceTier(5)).unwrap();
        assert_eq!(json, "5");

        let parsed: ClearanceTier = serde_json::from_str("5").unwrap();
        assert_eq!(parsed, ClearanceTier(5));
    }

    #[test]
    fn test_serde_rejects_negative() {
        let result: Result<ClearanceTier, _> = serde_json::from_str("-1");
        assert!(result.is_err());
    }
}

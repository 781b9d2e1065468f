//! per-decision resource facts.
//!
//! a resource context carries what the persistence layer knows about the
//! record being acted on: which record it is, who owns it, and what
//! clearance it demands. The engine treats all of it as opaque input and
//! never queries a store itself.

use serde::{Deserialize, Serialize};

use crate::actor::ActorId;
use crate::clearance::ClearanceTier;

/// unique identifier for a protected record (character, organization,
/// document, calendar entry, map region).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceId(pub u64);

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// facts about the resource a decision concerns.
///
/// every field is optional: an unowned record (an NPC, a system document)
/// has no owner, and a record without an assigned clearance tier has no
/// `required_tier`. Absence is never treated as permission - an ownership
/// rule with no owner fact falls through to its role branch, and a
/// clearance rule with nothing to resolve against denies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceContext {
    /// the record under decision, when the caller knows it.
    #[serde(default)]
    pub resource: Option<ResourceId>,

    /// the actor who owns this record instance, absent for unowned or
    /// system-owned resources.
    #[serde(default)]
    pub owner: Option<ActorId>,

    /// clearance tier demanded by this record, resolved by the caller
    /// from the organization/document row.
    #[serde(default)]
    pub required_tier: Option<ClearanceTier>,
}

impl ResourceContext {
    /// context for an unowned resource with no clearance requirement.
    pub fn unowned() -> Self {
        Self::default()
    }

    /// context naming a record by id.
    pub fn for_resource(id: ResourceId) -> Self {
        Self {
            resource: Some(id),
            ..Self::default()
        }
    }

    /// set the owning actor.
    pub fn owned_by(mut self, owner: ActorId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// set the required clearance tier.
    pub fn with_required_tier(mut self, tier: ClearanceTier) -> Self {
        self.required_tier = Some(tier);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unowned_has_no_facts() {
        let ctx = ResourceContext::unowned();
        assert_eq!(ctx.resource, None);
        assert_eq!(ctx.owner, None);
        assert_eq!(ctx.required_tier, None);
    }

    #[test]
    fn test_builders_compose() {
        let ctx = ResourceContext::for_resource(ResourceId(9))
            .owned_by(ActorId(2))
            .with_required_tier(ClearanceTier(3));

        assert_eq!(ctx.resource, Some(ResourceId(9)));
        assert_eq!(ctx.owner, Some(ActorId(2)));
        assert_eq!(ctx.required_tier, Some(ClearanceTier(3)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let ctx = ResourceContext::for_resource(ResourceId(1)).owned_by(ActorId(4));
        let json = serde_json::to_string(&ctx).unwrap();
        let parsed: ResourceContext = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ctx);
    }

    #[test]
    fn test_serde_all_fields_default() {
        let ctx: ResourceContext = serde_json::from_str("{}").unwrap();
        assert_eq!(ctx, ResourceContext::unowned());
    }
}

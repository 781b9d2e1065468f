//! clearance lookups over administratively assigned tiers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tabard_types::{ActorId, ClearanceTier, ResourceId};

/// lookup table for clearance tiers.
///
/// tiers are administratively assigned, not derived from role rank. The
/// persistence layer loads the assignments and hands them in; the engine
/// treats them as opaque data and performs no I/O of its own. An actor or
/// resource with no entry sits at tier 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClearanceRegistry {
    /// effective tier per actor.
    #[serde(default)]
    pub actor_tiers: HashMap<ActorId, ClearanceTier>,

    /// required tier per organization/document record.
    #[serde(default)]
    pub resource_tiers: HashMap<ResourceId, ClearanceTier>,
}

impl ClearanceRegistry {
    /// create an empty registry (everything at tier 0).
    pub fn empty() -> Self {
        Self::default()
    }

    /// assign an actor's effective tier.
    pub fn grant(&mut self, actor: ActorId, tier: ClearanceTier) {
        self.actor_tiers.insert(actor, tier);
    }

    /// set the tier a record requires.
    pub fn require(&mut self, resource: ResourceId, tier: ClearanceTier) {
        self.resource_tiers.insert(resource, tier);
    }

    /// the actor's effective tier; 0 when unassigned.
    pub fn effective_tier(&self, actor: ActorId) -> ClearanceTier {
        self.actor_tiers.get(&actor).copied().unwrap_or_default()
    }

    /// the tier a record requires; 0 when unset.
    pub fn required_tier(&self, resource: ResourceId) -> ClearanceTier {
        self.resource_tiers
            .get(&resource)
            .copied()
            .unwrap_or_default()
    }

    /// true iff `actor`'s effective tier covers `resource`'s requirement.
    pub fn is_sufficient(&self, actor: ActorId, resource: ResourceId) -> bool {
        self.effective_tier(actor).covers(self.required_tier(resource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unassigned_defaults_to_zero() {
        let registry = ClearanceRegistry::empty();
        assert_eq!(registry.effective_tier(ActorId(1)), ClearanceTier::NONE);
        assert_eq!(registry.required_tier(ResourceId(1)), ClearanceTier::NONE);
        // tier 0 covers tier 0
        assert!(registry.is_sufficient(ActorId(1), ResourceId(1)));
    }

    #[test]
    fn test_is_sufficient_monotonic() {
        let mut registry = ClearanceRegistry::empty();
        registry.require(ResourceId(10), ClearanceTier(3));

        registry.grant(ActorId(1), ClearanceTier(2));
        assert!(!registry.is_sufficient(ActorId(1), ResourceId(10)));

        registry.grant(ActorId(1), ClearanceTier(3));
        assert!(registry.is_sufficient(ActorId(1), ResourceId(10)));

        registry.grant(ActorId(1), ClearanceTier(4));
        assert!(registry.is_sufficient(ActorId(1), ResourceId(10)));
    }

    #[test]
    fn test_unassigned_actor_fails_positive_requirement() {
        let mut registry = ClearanceRegistry::empty();
        registry.require(ResourceId(10), ClearanceTier(1));
        assert!(!registry.is_sufficient(ActorId(1), ResourceId(10)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut registry = ClearanceRegistry::empty();
        registry.grant(ActorId(1), ClearanceTier(2));
        registry.require(ResourceId(5), ClearanceTier(3));

        let json = serde_json::to_string(&registry).unwrap();
        let parsed: ClearanceRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.effective_tier(ActorId(1)), ClearanceTier(2));
        assert_eq!(parsed.required_tier(ResourceId(5)), ClearanceTier(3));
    }
}

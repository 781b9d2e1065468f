//! test utilities for creating actors and resource contexts.
//!
//! this module provides builder patterns for creating test instances
//! of tabard types without needing to spell out every field.

use crate::{Actor, ActorId, ClearanceTier, ResourceContext, ResourceId, RoleRank, TeamId};

/// builder for creating test [`Actor`] snapshots.
///
/// # example
/// ```
/// use tabard_types::RoleRank;
/// use tabard_types::test_utils::TestActorBuilder;
///
/// let player = TestActorBuilder::new(1).build();
/// let moderator = TestActorBuilder::new(2)
///     .with_role(RoleRank::Moderator)
///     .with_teams(vec!["moderation".parse().unwrap()])
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct TestActorBuilder {
    id: u64,
    role: RoleRank,
    teams: Vec<TeamId>,
}

impl TestActorBuilder {
    /// create a new builder with the given actor id; the role defaults
    /// to [`RoleRank::Player`].
    pub fn new(id: u64) -> Self {
        Self {
            id,
            role: RoleRank::Player,
            teams: vec![],
        }
    }

    /// set the role rank.
    pub fn with_role(mut self, role: RoleRank) -> Self {
        self.role = role;
        self
    }

    /// set team memberships.
    pub fn with_teams(mut self, teams: Vec<TeamId>) -> Self {
        self.teams = teams;
        self
    }

    /// build the [`Actor`].
    pub fn build(self) -> Actor {
        Actor::new(ActorId(self.id), self.role).with_teams(self.teams)
    }
}

/// builder for creating test [`ResourceContext`] values.
#[derive(Debug, Clone, Default)]
pub struct TestResourceBuilder {
    resource: Option<ResourceId>,
    owner: Option<ActorId>,
    required_tier: Option<ClearanceTier>,
}

impl TestResourceBuilder {
    /// create a new empty builder (unowned, no clearance requirement).
    pub fn new() -> Self {
        Self::default()
    }

    /// name the record by id.
    pub fn with_id(mut self, id: u64) -> Self {
        self.resource = Some(ResourceId(id));
        self
    }

    /// set the owning actor.
    pub fn owned_by(mut self, owner: u64) -> Self {
        self.owner = Some(ActorId(owner));
        self
    }

    /// set the required clearance tier.
    pub fn with_required_tier(mut self, tier: u32) -> Self {
        self.required_tier = Some(ClearanceTier(tier));
        self
    }

    /// build the [`ResourceContext`].
    pub fn build(self) -> ResourceContext {
        ResourceContext {
            resource: self.resource,
            owner: self.owner,
            required_tier: self.required_tier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_builder_defaults() {
        let actor = TestActorBuilder::new(1).build();
        assert_eq!(actor.id, ActorId(1));
        assert_eq!(actor.role, RoleRank::Player);
        assert!(actor.teams.is_empty());
    }

    #[test]
    fn test_actor_builder_with_role_and_teams() {
        let actor = TestActorBuilder::new(2)
            .with_role(RoleRank::Moderator)
            .with_teams(vec!["moderation".parse().unwrap()])
            .build();
        assert_eq!(actor.role, RoleRank::Moderator);
        assert!(actor.is_member(&"moderation".parse().unwrap()));
    }

    #[test]
    fn test_resource_builder() {
        let ctx = TestResourceBuilder::new()
            .with_id(5)
            .owned_by(1)
            .with_required_tier(2)
            .build();
        assert_eq!(ctx.resource, Some(ResourceId(5)));
        assert_eq!(ctx.owner, Some(ActorId(1)));
        assert_eq!(ctx.required_tier, Some(ClearanceTier(2)));
    }
}

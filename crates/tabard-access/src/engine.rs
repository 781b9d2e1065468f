//! the main access evaluation engine.

use std::sync::Arc;

use tabard_types::{Actor, ActorId, ClearanceTier, ResourceContext, RoleRank, TeamId};
use tracing::debug;

use crate::catalog::PolicyCatalog;
use crate::clearance::ClearanceRegistry;
use crate::decision::{AuditEntry, Decision, Reason};
use crate::policy::PolicyExpression;

/// thread-safe access evaluation engine.
///
/// wraps the rule catalog and clearance table in arcs for cheap cloning
/// and concurrent access. Evaluation takes `&self`, performs no I/O and
/// holds no locks, so any number of request handlers can decide
/// concurrently; `update_catalog` swaps the catalog atomically for hot
/// reload.
pub struct AccessEngine {
    catalog: Arc<PolicyCatalog>,
    clearances: Arc<ClearanceRegistry>,
}

impl AccessEngine {
    /// create a new engine with the given catalog and clearance table.
    pub fn new(catalog: PolicyCatalog, clearances: ClearanceRegistry) -> Self {
        Self {
            catalog: Arc::new(catalog),
            clearances: Arc::new(clearances),
        }
    }

    /// create an engine with an empty catalog (deny all).
    pub fn empty() -> Self {
        Self::new(PolicyCatalog::empty(), ClearanceRegistry::empty())
    }

    /// create an engine with the built-in catalog.
    pub fn builtin() -> Self {
        Self::new(PolicyCatalog::builtin(), ClearanceRegistry::empty())
    }

    /// replace the catalog atomically.
    pub fn update_catalog(&mut self, catalog: PolicyCatalog) {
        self.catalog = Arc::new(catalog);
    }

    /// replace the clearance table atomically.
    pub fn update_clearances(&mut self, clearances: ClearanceRegistry) {
        self.clearances = Arc::new(clearances);
    }

    /// get the current catalog (for serialisation).
    pub fn catalog(&self) -> &PolicyCatalog {
        &self.catalog
    }

    /// get the current clearance table.
    pub fn clearances(&self) -> &ClearanceRegistry {
        &self.clearances
    }

    /// decide a named action for `actor`.
    ///
    /// an action with no declared rule is denied: the catalog is the only
    /// source of permissions, so forgetting to declare one fails closed
    /// rather than open.
    pub fn evaluate_action(
        &self,
        actor: &Actor,
        action: &str,
        resource: Option<&ResourceContext>,
    ) -> Decision {
        let decision = match self.catalog.rule(action) {
            Some(rule) => self.evaluate(actor, rule, resource),
            None => Decision::deny(Reason::UnknownAction),
        };

        if decision.is_denied() {
            debug!(
                actor = %actor.id,
                action,
                reason = %decision.reason,
                "access denied"
            );
        }

        decision
    }

    /// decide a single rule for `actor`.
    ///
    /// total over every well-formed input: each variant produces a
    /// decision for every actor/resource pair, nothing panics, and every
    /// failure mode is a deny with a reason rather than an error.
    pub fn evaluate(
        &self,
        actor: &Actor,
        rule: &PolicyExpression,
        resource: Option<&ResourceContext>,
    ) -> Decision {
        match rule {
            PolicyExpression::Open => Decision::allow(Reason::OpenPolicy),

            PolicyExpression::RoleAtLeast { role } => role_check(actor, *role),

            PolicyExpression::RoleAndTeam {
                role,
                team,
                override_role,
            } => self.role_and_team(actor, *role, team.as_ref(), *override_role),

            PolicyExpression::OwnerOrRole { role } => {
                // absence of an owner fact is never ownership
                if let Some(owner) = resource.and_then(|r| r.owner)
                    && owner == actor.id
                {
                    return Decision::allow(Reason::Owner);
                }
                role_check(actor, *role)
            }

            PolicyExpression::ClearanceAtLeast { tier } => {
                self.clearance_check(actor, *tier, resource)
            }
        }
    }

    /// decide an action and wrap the outcome as an audit record.
    pub fn audit(
        &self,
        actor: &Actor,
        action: &str,
        resource: Option<&ResourceContext>,
    ) -> AuditEntry {
        let decision = self.evaluate_action(actor, action, resource);
        AuditEntry::record(actor.id, action, decision)
    }

    /// all catalog actions `actor` may perform on `resource`.
    ///
    /// this is the navigation surface: an entry is shown iff the same
    /// decision function allows it, so menus can never drift from the
    /// route checks.
    pub fn visible_actions<'a>(
        &'a self,
        actor: &Actor,
        resource: Option<&ResourceContext>,
    ) -> Vec<&'a str> {
        self.catalog
            .rules
            .iter()
            .filter(|(_, rule)| self.evaluate(actor, rule, resource).allow)
            .map(|(action, _)| action.as_str())
            .collect()
    }

    /// the override branch is checked first so a sufficiently ranked
    /// actor passes without any team lookup.
    fn role_and_team(
        &self,
        actor: &Actor,
        role: RoleRank,
        team: Option<&TeamId>,
        override_role: Option<RoleRank>,
    ) -> Decision {
        if let Some(override_role) = override_role
            && actor.role.at_least(override_role)
        {
            return Decision::allow(Reason::OverrideRole);
        }

        if !actor.role.at_least(role) {
            return Decision::deny(Reason::RoleInsufficient);
        }

        match team {
            // no team named: collapses to the role check alone
            None => Decision::allow(Reason::RoleSatisfied),
            Some(team) if actor.is_member(team) => Decision::allow(Reason::RoleSatisfied),
            Some(_) => Decision::deny(Reason::NotTeamMember),
        }
    }

    /// missing data denies: a clearance rule with nothing to resolve
    /// against must not default to open.
    fn clearance_check(
        &self,
        actor: &Actor,
        floor: ClearanceTier,
        resource: Option<&ResourceContext>,
    ) -> Decision {
        let Some(context) = resource else {
            return Decision::deny(Reason::ClearanceUnresolved);
        };

        let resolved = match (context.required_tier, context.resource) {
            (Some(tier), _) => tier,
            (None, Some(id)) => self.clearances.required_tier(id),
            (None, None) => return Decision::deny(Reason::ClearanceUnresolved),
        };

        // the declared floor still applies when the record demands less
        let required = resolved.max(floor);

        if self.effective_tier(actor.id).covers(required) {
            Decision::allow(Reason::ClearanceSatisfied)
        } else {
            Decision::deny(Reason::ClearanceInsufficient)
        }
    }

    fn effective_tier(&self, actor: ActorId) -> ClearanceTier {
        self.clearances.effective_tier(actor)
    }
}

fn role_check(actor: &Actor, required: RoleRank) -> Decision {
    if actor.role.at_least(required) {
        Decision::allow(Reason::RoleSatisfied)
    } else {
        Decision::deny(Reason::RoleInsufficient)
    }
}

impl Clone for AccessEngine {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            clearances: Arc::clone(&self.clearances),
        }
    }
}

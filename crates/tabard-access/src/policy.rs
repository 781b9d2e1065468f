//! the closed set of rule shapes protected actions are declared with.

use serde::{Deserialize, Serialize};
use tabard_types::{ClearanceTier, RoleRank, TeamId};

/// a declarative authorization rule for one protected action.
///
/// this is data, not code: the four shapes below (plus [`Open`]) are the
/// only compositions of rank, team, ownership and clearance the
/// application uses, and route/navigation declarations pick one per
/// action. There is deliberately no way to nest or extend them.
///
/// in json form the variant is tagged by `kind`:
///
/// ```json
/// { "kind": "role_and_team", "role": "staff", "team": "storytellers", "override": "admin" }
/// ```
///
/// identifiers are validated while parsing - an unknown role name or a
/// malformed team name makes the whole declaration unloadable instead of
/// producing a rule that silently never (or always) matches.
///
/// [`Open`]: PolicyExpression::Open
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyExpression {
    /// always allowed.
    Open,

    /// allowed iff the actor's rank is at least `role`.
    RoleAtLeast {
        /// minimum rank.
        role: RoleRank,
    },

    /// allowed iff the actor's rank is at least `role` and the actor is
    /// a member of `team`; an actor at or above `override_role` passes
    /// regardless of team.
    ///
    /// an absent team collapses this to a plain role check.
    RoleAndTeam {
        /// minimum rank for the team branch.
        role: RoleRank,
        /// required team membership.
        #[serde(default)]
        team: Option<TeamId>,
        /// rank that bypasses the team requirement entirely.
        #[serde(default, rename = "override")]
        override_role: Option<RoleRank>,
    },

    /// allowed iff the actor owns the resource instance, or the actor's
    /// rank is at least `role`.
    OwnerOrRole {
        /// minimum rank for non-owners.
        role: RoleRank,
    },

    /// allowed iff the actor's effective clearance tier covers the
    /// resource's required tier.
    ClearanceAtLeast {
        /// declared floor; a resource demanding a higher tier governs.
        #[serde(default)]
        tier: ClearanceTier,
    },
}

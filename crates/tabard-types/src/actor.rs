//! actor snapshot supplied by the session layer.
//!
//! an actor is the already-authenticated user on whose behalf a request
//! runs. The snapshot is assembled once per request (role from the account
//! record, teams from the membership store) and stays immutable for the
//! lifetime of every decision made with it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::role::RoleRank;
use crate::team::TeamId;

/// unique identifier for an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u64);

impl From<u64> for ActorId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// an immutable per-request snapshot of the acting user.
///
/// the engine never fetches or refreshes this itself; the caller resolves
/// role and team membership up front and hands the finished value in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// unique identifier.
    pub id: ActorId,

    /// global role rank.
    pub role: RoleRank,

    /// resolved team memberships.
    #[serde(default)]
    pub teams: HashSet<TeamId>,
}

impl Actor {
    /// create an actor with no team memberships.
    pub fn new(id: ActorId, role: RoleRank) -> Self {
        Self {
            id,
            role,
            teams: HashSet::new(),
        }
    }

    /// replace the team membership set.
    pub fn with_teams(mut self, teams: impl IntoIterator<Item = TeamId>) -> Self {
        self.teams = teams.into_iter().collect();
        self
    }

    /// true iff this actor belongs to `team`.
    ///
    /// pure set lookup over the snapshot; membership resolution happened
    /// before the snapshot was built.
    pub fn is_member(&self, team: &TeamId) -> bool {
        self.teams.contains(team)
    }
}

//! the engine's output: an allow/deny decision with a machine-checkable
//! reason, plus the audit datum built from one.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabard_types::ActorId;

/// machine-readable code explaining a decision.
///
/// reasons identify which clause of the rule settled the outcome, so
/// callers and auditors can distinguish (say) a rank failure from a
/// missing team membership without re-running the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    /// the rule is open to everyone.
    OpenPolicy,
    /// the actor's rank met the required role.
    RoleSatisfied,
    /// the actor's rank is below the required role.
    RoleInsufficient,
    /// the override rank was met, bypassing the team requirement.
    OverrideRole,
    /// the actor owns the resource instance.
    Owner,
    /// rank was sufficient but the actor is not in the required team.
    NotTeamMember,
    /// the actor's clearance tier covers the requirement.
    ClearanceSatisfied,
    /// the actor's clearance tier is below the requirement.
    ClearanceInsufficient,
    /// the clearance requirement could not be resolved; denied rather
    /// than assumed open.
    ClearanceUnresolved,
    /// the requested action has no declared rule; denied by default.
    UnknownAction,
}

impl Reason {
    /// the canonical snake_case name (e.g., "not_team_member").
    pub fn as_str(self) -> &'static str {
        match self {
            Reason::OpenPolicy => "open_policy",
            Reason::RoleSatisfied => "role_satisfied",
            Reason::RoleInsufficient => "role_insufficient",
            Reason::OverrideRole => "override_role",
            Reason::Owner => "owner",
            Reason::NotTeamMember => "not_team_member",
            Reason::ClearanceSatisfied => "clearance_satisfied",
            Reason::ClearanceInsufficient => "clearance_insufficient",
            Reason::ClearanceUnresolved => "clearance_unresolved",
            Reason::UnknownAction => "unknown_action",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// the outcome of evaluating one rule for one actor.
///
/// produced fresh per evaluation and never cached across requests -
/// actor and resource facts can change between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// whether the operation is permitted.
    pub allow: bool,
    /// which clause settled it.
    pub reason: Reason,
}

impl Decision {
    /// an allowing decision.
    pub fn allow(reason: Reason) -> Self {
        Self {
            allow: true,
            reason,
        }
    }

    /// a denying decision.
    pub fn deny(reason: Reason) -> Self {
        Self {
            allow: false,
            reason,
        }
    }

    /// true iff the operation was denied.
    pub fn is_denied(&self) -> bool {
        !self.allow
    }
}

/// the record an auditor needs about one decision.
///
/// the engine constructs these on demand; storing or shipping them is the
/// caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// who acted.
    pub actor: ActorId,
    /// the protected action that was requested.
    pub action: String,
    /// whether it was permitted.
    pub allow: bool,
    /// which clause settled it.
    pub reason: Reason,
    /// when the decision was made.
    pub evaluated_at: DateTime<Utc>,
}

impl AuditEntry {
    /// build an audit entry from a decision, stamped now.
    pub fn record(actor: ActorId, action: impl Into<String>, decision: Decision) -> Self {
        Self {
            actor,
            action: action.into(),
            allow: decision.allow,
            reason: decision.reason,
            evaluated_at: Utc::now(),
        }
    }
}

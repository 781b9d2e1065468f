//! core types for tabard - a role-play community management server.
//!
//! this crate provides the fundamental data structures used throughout tabard:
//! - [`RoleRank`]: the global trust hierarchy
//! - [`TeamId`]: validated team names for scoped privileges
//! - [`Actor`]: the per-request snapshot of the acting user
//! - [`ClearanceTier`]: numeric access thresholds for organizations/documents
//! - [`ResourceContext`]: per-decision resource facts

mod actor;
mod clearance;
mod resource;
mod role;
mod team;

pub mod test_utils;

pub use actor::{Actor, ActorId};
pub use clearance::ClearanceTier;
pub use resource::{ResourceContext, ResourceId};
pub use role::{RoleError, RoleRank};
pub use team::{MAX_TEAM_NAME_LEN, TeamId, TeamIdError};

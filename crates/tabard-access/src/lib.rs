//! access control policy engine for tabard.
//!
//! this crate decides whether an acting user may perform a protected
//! operation. Rules compose four trust axes - global role rank, team
//! membership, per-record clearance tiers, and resource ownership - as a
//! small closed set of declarative shapes, evaluated with deny-by-default
//! semantics: missing rules, missing facts and unresolvable lookups all
//! deny with a machine-readable reason instead of failing open.

#![warn(missing_docs)]

pub mod catalog;
pub mod clearance;
pub mod decision;
pub mod engine;
pub mod error;
pub mod policy;

pub use catalog::PolicyCatalog;
pub use clearance::ClearanceRegistry;
pub use decision::{AuditEntry, Decision, Reason};
pub use engine::AccessEngine;
pub use error::{Error, Result, ValidationError};
pub use policy::PolicyExpression;

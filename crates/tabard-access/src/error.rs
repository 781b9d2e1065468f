//! error types for tabard-access.
//!
//! these cover the construction boundary only: loading or validating a
//! rule catalog. Evaluation itself never returns an error - every failure
//! mode inside the evaluator is a denied [`crate::Decision`] carrying a
//! reason, so a careless caller can never mistake an unwound failure for
//! an allow.

use thiserror::Error;

/// errors that can occur in tabard-access.
#[derive(Debug, Error)]
pub enum Error {
    /// failed to parse catalog json.
    #[error("failed to parse catalog JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    /// a rule in the catalog failed validation.
    #[error("invalid rule for action {action:?}: {cause}")]
    InvalidRule {
        /// the action key the rule was declared under.
        action: String,
        /// the specific validation error.
        cause: ValidationError,
    },
}

/// structural validation errors for catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// action name is empty.
    #[error("action name cannot be empty")]
    EmptyAction,

    /// action name is not dotted lowercase (e.g., "characters.edit").
    #[error("action name must be dotted lowercase segments, got: {0}")]
    InvalidAction(String),
}

/// result type for tabard-access operations.
pub type Result<T> = std::result::Result<T, Error>;

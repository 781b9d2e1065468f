//! the catalog mapping protected actions to their rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabard_types::RoleRank;

use crate::error::{Error, ValidationError};
use crate::policy::PolicyExpression;

/// a declarative map from action name to rule.
///
/// action names are dotted lowercase paths (`"characters.edit"`,
/// `"moderation.queue"`). One catalog covers every protected route and
/// navigation entry; there is no second code path that re-implements a
/// rule inline.
///
/// an action missing from the catalog is denied, so an empty catalog
/// denies everything.
///
/// ```json
/// {
///   "rules": {
///     "characters.edit": { "kind": "owner_or_role", "role": "moderator" },
///     "moderation.queue": {
///       "kind": "role_and_team", "role": "moderator",
///       "team": "moderation", "override": "system-admin"
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyCatalog {
    /// all declared rules, keyed by action name.
    #[serde(default)]
    pub rules: BTreeMap<String, PolicyExpression>,
}

impl PolicyCatalog {
    /// create an empty catalog (deny all).
    pub fn empty() -> Self {
        Self::default()
    }

    /// parse a catalog from a json string.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let catalog: PolicyCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// validate all action names in the catalog.
    ///
    /// rule bodies are already validated during deserialization (role and
    /// team names parse into checked types); this catches malformed keys.
    pub fn validate(&self) -> Result<(), Error> {
        for action in self.rules.keys() {
            validate_action(action).map_err(|cause| Error::InvalidRule {
                action: action.clone(),
                cause,
            })?;
        }
        Ok(())
    }

    /// insert or replace the rule for an action.
    pub fn declare(&mut self, action: impl Into<String>, rule: PolicyExpression) {
        self.rules.insert(action.into(), rule);
    }

    /// look up the rule for an action.
    pub fn rule(&self, action: &str) -> Option<&PolicyExpression> {
        self.rules.get(action)
    }

    /// all declared action names, in sorted order.
    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// the default catalog shipped with the application.
    ///
    /// covers the protected surfaces of the character, organization,
    /// document, calendar, map, moderation and notification features.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();

        catalog.declare("characters.view", PolicyExpression::Open);
        catalog.declare(
            "characters.create",
            PolicyExpression::RoleAtLeast {
                role: RoleRank::Player,
            },
        );
        catalog.declare(
            "characters.edit",
            PolicyExpression::OwnerOrRole {
                role: RoleRank::Moderator,
            },
        );
        catalog.declare(
            "characters.delete",
            PolicyExpression::OwnerOrRole {
                role: RoleRank::Admin,
            },
        );

        catalog.declare("organizations.view", PolicyExpression::Open);
        catalog.declare(
            "organizations.manage",
            PolicyExpression::RoleAtLeast {
                role: RoleRank::Staff,
            },
        );

        // document access is tier-based; the document row carries the tier
        catalog.declare(
            "documents.view",
            PolicyExpression::ClearanceAtLeast {
                tier: tabard_types::ClearanceTier::NONE,
            },
        );
        catalog.declare(
            "documents.edit",
            PolicyExpression::OwnerOrRole {
                role: RoleRank::Staff,
            },
        );

        catalog.declare(
            "calendar.manage",
            PolicyExpression::RoleAndTeam {
                role: RoleRank::Staff,
                team: Some("storytellers".parse().expect("valid team name")),
                override_role: Some(RoleRank::Admin),
            },
        );
        catalog.declare(
            "map.edit",
            PolicyExpression::RoleAndTeam {
                role: RoleRank::Staff,
                team: Some("cartographers".parse().expect("valid team name")),
                override_role: Some(RoleRank::Admin),
            },
        );
        catalog.declare(
            "moderation.queue",
            PolicyExpression::RoleAndTeam {
                role: RoleRank::Moderator,
                team: Some("moderation".parse().expect("valid team name")),
                override_role: Some(RoleRank::SystemAdmin),
            },
        );

        catalog.declare(
            "notifications.broadcast",
            PolicyExpression::RoleAtLeast {
                role: RoleRank::Admin,
            },
        );
        catalog.declare(
            "admin.panel",
            PolicyExpression::RoleAtLeast {
                role: RoleRank::AssistantAdmin,
            },
        );

        catalog
    }
}

fn validate_action(action: &str) -> Result<(), ValidationError> {
    if action.is_empty() {
        return Err(ValidationError::EmptyAction);
    }

    let valid = action.split('.').all(|segment| {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    });

    if !valid {
        return Err(ValidationError::InvalidAction(action.to_string()));
    }

    Ok(())
}

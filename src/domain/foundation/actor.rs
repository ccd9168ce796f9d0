//! Acting-user types for transition authorization.
//!
//! These types represent the authenticated identity performing an
//! operation. They have **no provider dependencies** - whatever auth layer
//! the host uses populates them and threads them into every transition
//! call. Role is never read from ambient state.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::UserId;

/// Role label assigned to an authenticated user.
///
/// Architects author documents; reviewers (the enterprise architecture
/// office) approve them. Only transitions that carry a role requirement
/// compare against this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Architect,
    Reviewer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Architect => "ARCHITECT",
            Role::Reviewer => "REVIEWER",
        };
        write!(f, "{}", s)
    }
}

/// The authenticated user performing an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Identity from the auth provider.
    pub user_id: UserId,

    /// Role label the auth provider resolved for this user.
    pub role: Role,
}

impl Actor {
    /// Creates a new actor.
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Returns true if this actor holds the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}

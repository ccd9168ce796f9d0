//! Reviewer concerns attached to a document during approval.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a reviewer concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConcernType {
    Risk,
    Decision,
    Deviation,
}

impl fmt::Display for ConcernType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConcernType::Risk => "RISK",
            ConcernType::Decision => "DECISION",
            ConcernType::Deviation => "DEVIATION",
        };
        write!(f, "{}", s)
    }
}

/// Workflow status of a concern.
///
/// Currently a single value; further states (accepted, mitigated, ...)
/// slot in here without changing the concern shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConcernStatus {
    #[default]
    Unknown,
}

/// A risk, decision, or deviation noted by a reviewer.
///
/// Concerns live inside the solution overview section and are merged in
/// atomically with the approval transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concern {
    /// What kind of concern this is.
    #[serde(rename = "type")]
    pub concern_type: ConcernType,

    /// What the reviewer observed.
    pub description: String,

    /// Consequence for the solution if left unaddressed.
    pub impact: String,

    /// How the concern is expected to be handled.
    pub disposition: String,

    /// Workflow status of the concern.
    #[serde(default)]
    pub status: ConcernStatus,
}

impl Concern {
    /// Creates a concern with status [`ConcernStatus::Unknown`].
    pub fn new(
        concern_type: ConcernType,
        description: impl Into<String>,
        impact: impl Into<String>,
        disposition: impl Into<String>,
    ) -> Self {
        Self {
            concern_type,
            description: description.into(),
            impact: impact.into(),
            disposition: disposition.into(),
            status: ConcernStatus::Unknown,
        }
    }
}

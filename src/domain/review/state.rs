//! DocumentState enum for tracking the review document lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a solution review document.
///
/// The legal moves between states are defined by the transition table in
/// [`super::transitions`]; nothing else in the crate changes a document's
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentState {
    /// Being drafted by an architect; sections may be incomplete.
    #[default]
    Draft,
    /// Submitted for enterprise architecture review.
    Submitted,
    /// Approved by a reviewer but not yet the authoritative version.
    Approved,
    /// The single authoritative version for its system.
    Current,
    /// A previously current version that was superseded.
    Outdated,
}

impl DocumentState {
    /// Returns true if the document content is still being authored.
    pub fn is_draft(&self) -> bool {
        matches!(self, DocumentState::Draft)
    }

    /// Returns true if this is the authoritative version for its system.
    pub fn is_current(&self) -> bool {
        matches!(self, DocumentState::Current)
    }

    /// Returns all five states in lifecycle order.
    pub fn all() -> [DocumentState; 5] {
        [
            DocumentState::Draft,
            DocumentState::Submitted,
            DocumentState::Approved,
            DocumentState::Current,
            DocumentState::Outdated,
        ]
    }
}

impl fmt::Display for DocumentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DocumentState::Draft => "DRAFT",
            DocumentState::Submitted => "SUBMITTED",
            DocumentState::Approved => "APPROVED",
            DocumentState::Current => "CURRENT",
            DocumentState::Outdated => "OUTDATED",
        };
        write!(f, "{}", s)
    }
}

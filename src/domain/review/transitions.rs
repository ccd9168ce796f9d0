//! The transition table: which operations are legal from which state.
//!
//! This table is the single authority on state changes. The executor
//! looks transitions up here before applying them, and UIs consult
//! [`available_transitions`] to decide which actions to offer an actor.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Role;

use super::DocumentState;

/// A named lifecycle operation on a review document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    Submit,
    RemoveSubmission,
    Approve,
    Unapprove,
    Activate,
    MarkOutdated,
    ResetCurrent,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::Submit => "SUBMIT",
            Operation::RemoveSubmission => "REMOVE_SUBMISSION",
            Operation::Approve => "APPROVE",
            Operation::Unapprove => "UNAPPROVE",
            Operation::Activate => "ACTIVATE",
            Operation::MarkOutdated => "MARK_OUTDATED",
            Operation::ResetCurrent => "RESET_CURRENT",
        };
        write!(f, "{}", s)
    }
}

/// One row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    /// The operation that drives this transition.
    pub operation: Operation,
    /// The state the document lands in.
    pub to: DocumentState,
    /// Short label for action buttons.
    pub name: &'static str,
    /// One-line explanation for the actor.
    pub description: &'static str,
    /// Role the actor must hold, if restricted.
    pub required_role: Option<Role>,
}

/// Returns the transitions legal from the given state.
pub fn transitions_from(state: DocumentState) -> &'static [Transition] {
    match state {
        DocumentState::Draft => &[Transition {
            operation: Operation::Submit,
            to: DocumentState::Submitted,
            name: "Submit for review",
            description: "Send the completed document to enterprise architecture review",
            required_role: None,
        }],
        DocumentState::Submitted => &[
            Transition {
                operation: Operation::RemoveSubmission,
                to: DocumentState::Draft,
                name: "Withdraw submission",
                description: "Return the document to draft for further editing",
                required_role: None,
            },
            Transition {
                operation: Operation::Approve,
                to: DocumentState::Approved,
                name: "Approve",
                description: "Approve the submitted document, optionally recording concerns",
                required_role: Some(Role::Reviewer),
            },
        ],
        DocumentState::Approved => &[
            Transition {
                operation: Operation::Unapprove,
                to: DocumentState::Submitted,
                name: "Revoke approval",
                description: "Return the document to the review queue",
                required_role: None,
            },
            Transition {
                operation: Operation::Activate,
                to: DocumentState::Current,
                name: "Activate",
                description: "Make this the current version; the previous current version is retired",
                required_role: None,
            },
        ],
        DocumentState::Current => &[Transition {
            operation: Operation::MarkOutdated,
            to: DocumentState::Outdated,
            name: "Mark outdated",
            description: "Retire this version when a newer one is activated",
            required_role: None,
        }],
        DocumentState::Outdated => &[Transition {
            operation: Operation::ResetCurrent,
            to: DocumentState::Current,
            name: "Restore as current",
            description: "Administrative rollback to this version",
            required_role: None,
        }],
    }
}

/// Finds the transition for an operation from the given state, if legal.
pub fn find_transition(state: DocumentState, operation: Operation) -> Option<&'static Transition> {
    transitions_from(state).iter().find(|t| t.operation == operation)
}

/// Returns the transitions an actor with the given role may be offered
/// from the given state.
pub fn available_transitions(state: DocumentState, role: Role) -> Vec<&'static Transition> {
    transitions_from(state)
        .iter()
        .filter(|t| t.required_role.map_or(true, |required| required == role))
        .collect()
}

//! Error types for the review lifecycle.

use thiserror::Error;

use crate::domain::foundation::{DocumentId, Role, SystemCode};

use super::{DocumentState, Operation, SectionKey};

/// Errors surfaced by the review lifecycle operations.
///
/// Every variant carries the context a host needs to render a user-facing
/// message; none of them should crash the process.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    /// The operation is not legal from the document's current state.
    #[error("Operation {operation} is not valid for a document in state {from}")]
    InvalidTransition {
        from: DocumentState,
        operation: Operation,
    },

    /// The actor lacks the role the transition requires.
    #[error("Operation {operation} requires role {required}")]
    Forbidden {
        operation: Operation,
        required: Role,
    },

    /// Submission attempted while sections are still missing.
    #[error("Document is incomplete; missing sections: {}", format_missing(.missing))]
    IncompleteDocument { missing: Vec<SectionKey> },

    /// Concerns supplied but the document has no solution overview to
    /// attach them to.
    #[error("Cannot record concerns on a document without a solution overview")]
    MissingOverview,

    /// A new draft was requested for a system with no current version.
    #[error("No current version exists for system {system_code}")]
    NoCurrentVersion { system_code: SystemCode },

    /// The document does not exist in the store.
    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    /// An insert collided with an existing document.
    #[error("Document already exists: {0}")]
    DocumentAlreadyExists(DocumentId),

    /// The backing store failed; the operation was rolled back.
    #[error("Storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    /// Creates a storage error with a message.
    pub fn storage(message: impl Into<String>) -> Self {
        DomainError::Storage(message.into())
    }

    /// Returns true if retrying the same operation may succeed without
    /// any caller-side change.
    pub fn is_retryable(&self) -> bool {
        matches!(self, DomainError::Storage(_))
    }
}

fn format_missing(missing: &[SectionKey]) -> String {
    missing
        .iter()
        .map(|key| key.label())
        .collect::<Vec<_>>()
        .join(", ")
}

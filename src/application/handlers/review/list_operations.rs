//! ListOperationsHandler - Query handler for the operations an actor may
//! be offered on a document.
//!
//! Consults the transition table: an operation is presentable when the
//! document's current state matches and the actor holds any required
//! role. UIs render the result directly as action buttons.

use std::sync::Arc;

use crate::domain::foundation::{Actor, DocumentId};
use crate::domain::review::{available_transitions, DomainError, Transition};
use crate::ports::DocumentRepository;

/// Query for the operations presentable on a document.
#[derive(Debug, Clone)]
pub struct ListOperationsQuery {
    /// The document whose actions to list.
    pub document_id: DocumentId,
}

/// Handler for listing presentable operations.
pub struct ListOperationsHandler {
    repository: Arc<dyn DocumentRepository>,
}

impl ListOperationsHandler {
    pub fn new(repository: Arc<dyn DocumentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListOperationsQuery,
        actor: Actor,
    ) -> Result<Vec<Transition>, DomainError> {
        let document = self
            .repository
            .find_by_id(&query.document_id)
            .await?
            .ok_or(DomainError::DocumentNotFound(query.document_id))?;

        Ok(available_transitions(document.document_state(), actor.role)
            .into_iter()
            .copied()
            .collect())
    }
}

//! SaveSectionHandler - persists one section of a draft in isolation.
//!
//! This is the editor wizard's write path: one section per save, the
//! other seven and the lifecycle state untouched, audit stamps updated.
//! The document does not need to be valid as a whole at any step.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{Actor, DocumentId};
use crate::domain::review::{DomainError, SectionPayload, SolutionReviewDocument};
use crate::ports::DocumentRepository;

/// Command to save one section of a document.
#[derive(Debug, Clone)]
pub struct SaveSectionCommand {
    /// The document being edited.
    pub document_id: DocumentId,
    /// The section value to write.
    pub payload: SectionPayload,
}

/// Handler for section saves.
pub struct SaveSectionHandler {
    repository: Arc<dyn DocumentRepository>,
}

impl SaveSectionHandler {
    pub fn new(repository: Arc<dyn DocumentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: SaveSectionCommand,
        actor: Actor,
    ) -> Result<SolutionReviewDocument, DomainError> {
        // 1. Load the document
        let mut document = self
            .repository
            .find_by_id(&cmd.document_id)
            .await?
            .ok_or(DomainError::DocumentNotFound(cmd.document_id))?;

        // 2. Write the one section and stamp the audit fields
        let section = cmd.payload.key();
        document.put_section(cmd.payload, &actor.user_id);

        // 3. Persist
        self.repository.update(&document).await?;

        debug!(
            document_id = %document.id(),
            section = section.as_str(),
            "saved section"
        );

        Ok(document)
    }
}

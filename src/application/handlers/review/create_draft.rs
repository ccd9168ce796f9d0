//! CreateDraftHandler - starts a new document version from the current one.
//!
//! Locates the `Current` document for a system, deep-copies its eight
//! sections into a fresh draft, and persists it. The current version is
//! left untouched; it is only retired when the new version is activated.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{Actor, SystemCode};
use crate::domain::review::{DomainError, SolutionReviewDocument};
use crate::ports::DocumentRepository;

/// Command to create a new draft from a system's current version.
#[derive(Debug, Clone)]
pub struct CreateDraftCommand {
    /// The system whose current version seeds the draft.
    pub system_code: SystemCode,
}

/// Handler for starting a new document version.
pub struct CreateDraftHandler {
    repository: Arc<dyn DocumentRepository>,
}

impl CreateDraftHandler {
    pub fn new(repository: Arc<dyn DocumentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateDraftCommand,
        actor: Actor,
    ) -> Result<SolutionReviewDocument, DomainError> {
        // 1. Find the current version to copy from
        let current = self
            .repository
            .find_current_by_system_code(&cmd.system_code, None)
            .await?
            .ok_or(DomainError::NoCurrentVersion {
                system_code: cmd.system_code,
            })?;

        // 2. Seed the draft with the current version's sections
        let draft = current.clone_as_draft(actor.user_id);

        // 3. Persist the new version
        self.repository.save(&draft).await?;

        info!(
            document_id = %draft.id(),
            system_code = %draft.system_code(),
            copied_from = %current.id(),
            "created draft from current version"
        );

        Ok(draft)
    }
}

//! ListDocumentsHandler - Query handler for a system's version history.

use std::sync::Arc;

use crate::domain::foundation::SystemCode;
use crate::domain::review::{DomainError, SolutionReviewDocument};
use crate::ports::DocumentRepository;

/// Query for all documents of one system.
#[derive(Debug, Clone)]
pub struct ListDocumentsQuery {
    /// The system whose version history to list.
    pub system_code: SystemCode,
}

/// Handler for listing a system's documents.
pub struct ListDocumentsHandler {
    repository: Arc<dyn DocumentRepository>,
}

impl ListDocumentsHandler {
    pub fn new(repository: Arc<dyn DocumentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListDocumentsQuery,
    ) -> Result<Vec<SolutionReviewDocument>, DomainError> {
        self.repository
            .find_by_system_code(&query.system_code)
            .await
    }
}

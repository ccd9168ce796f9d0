//! GetDocumentHandler - Query handler for loading one document.
//!
//! Returns the fully assembled document for display or for a read-only
//! completeness checklist.

use std::sync::Arc;

use crate::domain::foundation::DocumentId;
use crate::domain::review::{DomainError, SolutionReviewDocument};
use crate::ports::DocumentRepository;

/// Query to load a document by ID.
#[derive(Debug, Clone)]
pub struct GetDocumentQuery {
    /// The document to load.
    pub document_id: DocumentId,
}

/// Handler for loading documents.
pub struct GetDocumentHandler {
    repository: Arc<dyn DocumentRepository>,
}

impl GetDocumentHandler {
    pub fn new(repository: Arc<dyn DocumentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetDocumentQuery,
    ) -> Result<SolutionReviewDocument, DomainError> {
        self.repository
            .find_by_id(&query.document_id)
            .await?
            .ok_or(DomainError::DocumentNotFound(query.document_id))
    }
}

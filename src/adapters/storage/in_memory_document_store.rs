//! In-Memory Document Store Adapter
//!
//! Stores review documents in memory. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DocumentId, SystemCode};
use crate::domain::review::{DocumentState, DomainError, SolutionReviewDocument};
use crate::ports::DocumentRepository;

/// In-memory storage for review documents.
#[derive(Debug, Clone)]
pub struct InMemoryDocumentStore {
    documents: Arc<RwLock<HashMap<DocumentId, SolutionReviewDocument>>>,
}

impl InMemoryDocumentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            documents: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored documents (useful for tests).
    pub async fn clear(&self) {
        self.documents.write().await.clear();
    }

    /// Get the number of stored documents.
    pub async fn count(&self) -> usize {
        self.documents.read().await.len()
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentStore {
    async fn save(&self, document: &SolutionReviewDocument) -> Result<(), DomainError> {
        let mut documents = self.documents.write().await;
        if documents.contains_key(&document.id()) {
            return Err(DomainError::DocumentAlreadyExists(document.id()));
        }
        documents.insert(document.id(), document.clone());
        Ok(())
    }

    async fn update(&self, document: &SolutionReviewDocument) -> Result<(), DomainError> {
        let mut documents = self.documents.write().await;
        if !documents.contains_key(&document.id()) {
            return Err(DomainError::DocumentNotFound(document.id()));
        }
        documents.insert(document.id(), document.clone());
        Ok(())
    }

    async fn update_all(&self, updated: &[SolutionReviewDocument]) -> Result<(), DomainError> {
        let mut documents = self.documents.write().await;
        // Validate the whole batch before touching anything, so a bad
        // entry cannot leave a partial write behind.
        for document in updated {
            if !documents.contains_key(&document.id()) {
                return Err(DomainError::DocumentNotFound(document.id()));
            }
        }
        for document in updated {
            documents.insert(document.id(), document.clone());
        }
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &DocumentId,
    ) -> Result<Option<SolutionReviewDocument>, DomainError> {
        let documents = self.documents.read().await;
        Ok(documents.get(id).cloned())
    }

    async fn find_by_system_code(
        &self,
        system_code: &SystemCode,
    ) -> Result<Vec<SolutionReviewDocument>, DomainError> {
        let documents = self.documents.read().await;
        let mut history: Vec<SolutionReviewDocument> = documents
            .values()
            .filter(|d| d.system_code() == system_code)
            .cloned()
            .collect();
        history.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(history)
    }

    async fn find_current_by_system_code(
        &self,
        system_code: &SystemCode,
        excluding: Option<&DocumentId>,
    ) -> Result<Option<SolutionReviewDocument>, DomainError> {
        let documents = self.documents.read().await;
        Ok(documents
            .values()
            .find(|d| {
                d.system_code() == system_code
                    && d.document_state() == DocumentState::Current
                    && excluding.map_or(true, |id| d.id() != *id)
            })
            .cloned())
    }

    async fn exists(&self, id: &DocumentId) -> Result<bool, DomainError> {
        let documents = self.documents.read().await;
        Ok(documents.contains_key(id))
    }
}

//! Document repository port.
//!
//! Defines the contract for persisting and retrieving review documents.
//! Implementations handle the actual storage operations.
//!
//! # Design
//!
//! - **Atomic writes**: every method is one atomic unit against the
//!   backing store; `update_all` exists so activation and sibling
//!   retirement land together or not at all
//! - **System-scoped**: documents are queried by the system they review

use async_trait::async_trait;

use crate::domain::foundation::{DocumentId, SystemCode};
use crate::domain::review::{DomainError, SolutionReviewDocument};

/// Repository port for review document persistence.
///
/// Implementations must ensure each call either fully lands or leaves
/// the store unchanged - callers never observe a partial write.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Save a new document.
    ///
    /// # Errors
    ///
    /// - `DocumentAlreadyExists` if the id is already stored
    /// - `Storage` on persistence failure
    async fn save(&self, document: &SolutionReviewDocument) -> Result<(), DomainError>;

    /// Update an existing document.
    ///
    /// # Errors
    ///
    /// - `DocumentNotFound` if the document doesn't exist
    /// - `Storage` on persistence failure
    async fn update(&self, document: &SolutionReviewDocument) -> Result<(), DomainError>;

    /// Update several existing documents as one atomic unit.
    ///
    /// Used by the activation path to flip a document to current and
    /// retire its sibling in the same logical write. If any document in
    /// the batch cannot be written, none are.
    ///
    /// # Errors
    ///
    /// - `DocumentNotFound` if any document in the batch doesn't exist
    /// - `Storage` on persistence failure
    async fn update_all(&self, documents: &[SolutionReviewDocument]) -> Result<(), DomainError>;

    /// Find a document by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(
        &self,
        id: &DocumentId,
    ) -> Result<Option<SolutionReviewDocument>, DomainError>;

    /// Find all documents for a system (its version history).
    ///
    /// Returns documents ordered by created_at descending.
    async fn find_by_system_code(
        &self,
        system_code: &SystemCode,
    ) -> Result<Vec<SolutionReviewDocument>, DomainError>;

    /// Find the document in state `Current` for a system, optionally
    /// skipping one id (the document being activated).
    ///
    /// Returns `None` if the system has no current version.
    async fn find_current_by_system_code(
        &self,
        system_code: &SystemCode,
        excluding: Option<&DocumentId>,
    ) -> Result<Option<SolutionReviewDocument>, DomainError>;

    /// Check if a document exists.
    async fn exists(&self, id: &DocumentId) -> Result<bool, DomainError>;
}

//! File-based Document Store Adapter
//!
//! Stores review documents as JSON files on disk, one file per document.
//! Writes land in a temporary file first and are renamed into place, so a
//! crashed write never leaves a half-written document behind.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::{DocumentId, SystemCode};
use crate::domain::review::{DocumentState, DomainError, SolutionReviewDocument};
use crate::ports::DocumentRepository;

/// File-based storage for review documents.
#[derive(Debug, Clone)]
pub struct FileDocumentStore {
    base_path: PathBuf,
}

impl FileDocumentStore {
    /// Create a new file store rooted at a base directory.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileDocumentStore::new("./data/reviews");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the file path for a document.
    fn document_path(&self, id: &DocumentId) -> PathBuf {
        self.base_path.join(format!("{}.json", id))
    }

    /// Get the staging path a write goes to before its rename.
    fn staging_path(&self, id: &DocumentId) -> PathBuf {
        self.base_path.join(format!("{}.json.tmp", id))
    }

    /// Ensure the base directory exists.
    async fn ensure_dir(&self) -> Result<(), DomainError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))
    }

    /// Serialize a document into its staging file.
    async fn stage(&self, document: &SolutionReviewDocument) -> Result<PathBuf, DomainError> {
        let json = serde_json::to_string_pretty(document)
            .map_err(|e| DomainError::storage(e.to_string()))?;
        let staging = self.staging_path(&document.id());
        fs::write(&staging, json)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;
        Ok(staging)
    }

    /// Read and deserialize one document file.
    async fn read_document(&self, path: &Path) -> Result<SolutionReviewDocument, DomainError> {
        let json = fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;
        serde_json::from_str(&json).map_err(|e| DomainError::storage(e.to_string()))
    }

    /// Load every document in the store.
    async fn read_all(&self) -> Result<Vec<SolutionReviewDocument>, DomainError> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.base_path)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        let mut documents = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                documents.push(self.read_document(&path).await?);
            }
        }
        Ok(documents)
    }
}

#[async_trait]
impl DocumentRepository for FileDocumentStore {
    async fn save(&self, document: &SolutionReviewDocument) -> Result<(), DomainError> {
        self.ensure_dir().await?;

        let path = self.document_path(&document.id());
        if path.exists() {
            return Err(DomainError::DocumentAlreadyExists(document.id()));
        }

        let staging = self.stage(document).await?;
        fs::rename(&staging, &path)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))
    }

    async fn update(&self, document: &SolutionReviewDocument) -> Result<(), DomainError> {
        let path = self.document_path(&document.id());
        if !path.exists() {
            return Err(DomainError::DocumentNotFound(document.id()));
        }

        let staging = self.stage(document).await?;
        fs::rename(&staging, &path)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))
    }

    async fn update_all(&self, updated: &[SolutionReviewDocument]) -> Result<(), DomainError> {
        // Validate and stage the whole batch before renaming anything;
        // a failure here leaves only staging files behind, never a
        // half-updated batch.
        for document in updated {
            if !self.document_path(&document.id()).exists() {
                return Err(DomainError::DocumentNotFound(document.id()));
            }
        }

        let mut staged = Vec::with_capacity(updated.len());
        for document in updated {
            match self.stage(document).await {
                Ok(path) => staged.push((path, self.document_path(&document.id()))),
                Err(err) => {
                    for (staging, _) in staged {
                        let _ = fs::remove_file(staging).await;
                    }
                    return Err(err);
                }
            }
        }

        for (staging, path) in staged {
            fs::rename(&staging, &path)
                .await
                .map_err(|e| DomainError::storage(e.to_string()))?;
        }
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &DocumentId,
    ) -> Result<Option<SolutionReviewDocument>, DomainError> {
        let path = self.document_path(id);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(self.read_document(&path).await?))
    }

    async fn find_by_system_code(
        &self,
        system_code: &SystemCode,
    ) -> Result<Vec<SolutionReviewDocument>, DomainError> {
        let mut history: Vec<SolutionReviewDocument> = self
            .read_all()
            .await?
            .into_iter()
            .filter(|d| d.system_code() == system_code)
            .collect();
        history.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(history)
    }

    async fn find_current_by_system_code(
        &self,
        system_code: &SystemCode,
        excluding: Option<&DocumentId>,
    ) -> Result<Option<SolutionReviewDocument>, DomainError> {
        Ok(self
            .read_all()
            .await?
            .into_iter()
            .find(|d| {
                d.system_code() == system_code
                    && d.document_state() == DocumentState::Current
                    && excluding.map_or(true, |id| d.id() != *id)
            }))
    }

    async fn exists(&self, id: &DocumentId) -> Result<bool, DomainError> {
        Ok(self.document_path(id).exists())
    }
}

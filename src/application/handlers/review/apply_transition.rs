//! ApplyTransitionHandler - the single write entry point for lifecycle
//! operations.
//!
//! Validates the requested operation against the transition table, runs
//! its guards, and persists the outcome. A transition into `Current`
//! additionally retires the sibling current version of the same system
//! in the same atomic write, so the one-current-per-system invariant
//! holds at every observable point.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{Actor, DocumentId};
use crate::domain::review::{
    Concern, DocumentState, DomainError, Operation, SolutionReviewDocument,
};
use crate::ports::DocumentRepository;

/// Command to apply one lifecycle operation to a document.
#[derive(Debug, Clone)]
pub struct ApplyTransitionCommand {
    /// The document to transition.
    pub document_id: DocumentId,
    /// The operation to apply.
    pub operation: Operation,
    /// Reviewer concerns to record; only meaningful for `Approve`.
    pub concerns: Option<Vec<Concern>>,
}

/// Result of a successfully applied transition.
#[derive(Debug, Clone)]
pub struct ApplyTransitionResult {
    /// The document after the transition.
    pub document: SolutionReviewDocument,
    /// The sibling version retired by an activation, if there was one.
    pub retired: Option<SolutionReviewDocument>,
}

/// Handler for lifecycle transitions.
pub struct ApplyTransitionHandler {
    repository: Arc<dyn DocumentRepository>,
}

impl ApplyTransitionHandler {
    pub fn new(repository: Arc<dyn DocumentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: ApplyTransitionCommand,
        actor: Actor,
    ) -> Result<ApplyTransitionResult, DomainError> {
        let ApplyTransitionCommand {
            document_id,
            operation,
            concerns,
        } = cmd;

        // 1. Load the document
        let mut document = self
            .repository
            .find_by_id(&document_id)
            .await?
            .ok_or(DomainError::DocumentNotFound(document_id))?;

        // 2. Validate and apply the transition in memory; guards re-read
        //    the document's current state, never the caller's view of it
        let transition = document.apply_transition(operation, &actor, concerns)?;

        // 3. A transition into Current must retire the sibling holder
        let retired = if transition.to == DocumentState::Current {
            self.retire_sibling(&document, &actor).await?
        } else {
            None
        };

        // 4. Persist both documents together, or neither
        match &retired {
            Some(previous) => {
                self.repository
                    .update_all(&[document.clone(), previous.clone()])
                    .await?;
            }
            None => self.repository.update(&document).await?,
        }

        info!(
            document_id = %document.id(),
            operation = %operation,
            state = %document.document_state(),
            "applied transition"
        );

        Ok(ApplyTransitionResult { document, retired })
    }

    /// Applies `MarkOutdated` to the current sibling of the activating
    /// document, if any. Returns the retired sibling without persisting
    /// it - persistence happens in the caller's atomic write.
    async fn retire_sibling(
        &self,
        activating: &SolutionReviewDocument,
        actor: &Actor,
    ) -> Result<Option<SolutionReviewDocument>, DomainError> {
        let sibling = self
            .repository
            .find_current_by_system_code(activating.system_code(), Some(&activating.id()))
            .await?;

        match sibling {
            Some(mut previous) => {
                previous.apply_transition(Operation::MarkOutdated, actor, None)?;
                Ok(Some(previous))
            }
            // First version ever activated for this system
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Role, SystemCode, UserId};
    use crate::domain::review::{
        BusinessCapability, ConcernType, DataAsset, EnterpriseTool, IntegrationFlow,
        ProcessCompliance, SectionKey, SectionPayload, SolutionOverview, SystemComponent,
        TechnologyComponent,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ─────────────────────────────────────────────────────────────────────
    // Mock implementation
    // ─────────────────────────────────────────────────────────────────────

    struct MockDocumentRepository {
        documents: Mutex<Vec<SolutionReviewDocument>>,
        batch_updates: Mutex<Vec<Vec<SolutionReviewDocument>>>,
        fail_writes: bool,
    }

    impl MockDocumentRepository {
        fn with_documents(documents: Vec<SolutionReviewDocument>) -> Self {
            Self {
                documents: Mutex::new(documents),
                batch_updates: Mutex::new(Vec::new()),
                fail_writes: false,
            }
        }

        fn failing_with_documents(documents: Vec<SolutionReviewDocument>) -> Self {
            Self {
                documents: Mutex::new(documents),
                batch_updates: Mutex::new(Vec::new()),
                fail_writes: true,
            }
        }

        fn stored(&self, id: &DocumentId) -> SolutionReviewDocument {
            self.documents
                .lock()
                .unwrap()
                .iter()
                .find(|d| d.id() == *id)
                .cloned()
                .unwrap()
        }

        fn batch_updates(&self) -> Vec<Vec<SolutionReviewDocument>> {
            self.batch_updates.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DocumentRepository for MockDocumentRepository {
        async fn save(&self, document: &SolutionReviewDocument) -> Result<(), DomainError> {
            self.documents.lock().unwrap().push(document.clone());
            Ok(())
        }

        async fn update(&self, document: &SolutionReviewDocument) -> Result<(), DomainError> {
            if self.fail_writes {
                return Err(DomainError::storage("simulated update failure"));
            }
            let mut documents = self.documents.lock().unwrap();
            let slot = documents
                .iter_mut()
                .find(|d| d.id() == document.id())
                .ok_or(DomainError::DocumentNotFound(document.id()))?;
            *slot = document.clone();
            Ok(())
        }

        async fn update_all(
            &self,
            updated: &[SolutionReviewDocument],
        ) -> Result<(), DomainError> {
            if self.fail_writes {
                return Err(DomainError::storage("simulated batch failure"));
            }
            let mut documents = self.documents.lock().unwrap();
            for document in updated {
                if !documents.iter().any(|d| d.id() == document.id()) {
                    return Err(DomainError::DocumentNotFound(document.id()));
                }
            }
            for document in updated {
                let slot = documents
                    .iter_mut()
                    .find(|d| d.id() == document.id())
                    .expect("checked above");
                *slot = document.clone();
            }
            self.batch_updates.lock().unwrap().push(updated.to_vec());
            Ok(())
        }

        async fn find_by_id(
            &self,
            id: &DocumentId,
        ) -> Result<Option<SolutionReviewDocument>, DomainError> {
            Ok(self
                .documents
                .lock()
                .unwrap()
                .iter()
                .find(|d| d.id() == *id)
                .cloned())
        }

        async fn find_by_system_code(
            &self,
            system_code: &SystemCode,
        ) -> Result<Vec<SolutionReviewDocument>, DomainError> {
            Ok(self
                .documents
                .lock()
                .unwrap()
                .iter()
                .filter(|d| d.system_code() == system_code)
                .cloned()
                .collect())
        }

        async fn find_current_by_system_code(
            &self,
            system_code: &SystemCode,
            excluding: Option<&DocumentId>,
        ) -> Result<Option<SolutionReviewDocument>, DomainError> {
            Ok(self
                .documents
                .lock()
                .unwrap()
                .iter()
                .find(|d| {
                    d.system_code() == system_code
                        && d.document_state() == DocumentState::Current
                        && excluding.map_or(true, |id| d.id() != *id)
                })
                .cloned())
        }

        async fn exists(&self, id: &DocumentId) -> Result<bool, DomainError> {
            Ok(self
                .documents
                .lock()
                .unwrap()
                .iter()
                .any(|d| d.id() == *id))
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Test helpers
    // ─────────────────────────────────────────────────────────────────────

    fn architect() -> Actor {
        Actor::new(UserId::new("alice-architect").unwrap(), Role::Architect)
    }

    fn reviewer() -> Actor {
        Actor::new(UserId::new("rhea-reviewer").unwrap(), Role::Reviewer)
    }

    fn system_code() -> SystemCode {
        SystemCode::new("SYS-001").unwrap()
    }

    fn complete_draft() -> SolutionReviewDocument {
        let mut doc = SolutionReviewDocument::new(system_code(), architect().user_id);
        let by = architect().user_id;
        doc.put_section(
            SectionPayload::SolutionOverview(SolutionOverview::new("Payments platform")),
            &by,
        );
        doc.put_section(
            SectionPayload::BusinessCapabilities(vec![BusinessCapability {
                name: "Payment processing".to_string(),
                description: None,
            }]),
            &by,
        );
        doc.put_section(
            SectionPayload::DataAssets(vec![DataAsset {
                name: "Transactions".to_string(),
                classification: None,
                description: None,
            }]),
            &by,
        );
        doc.put_section(
            SectionPayload::SystemComponents(vec![SystemComponent {
                name: "payment-api".to_string(),
                responsibility: None,
            }]),
            &by,
        );
        doc.put_section(
            SectionPayload::TechnologyComponents(vec![TechnologyComponent {
                name: "PostgreSQL".to_string(),
                version: None,
                category: None,
            }]),
            &by,
        );
        doc.put_section(
            SectionPayload::IntegrationFlows(vec![IntegrationFlow {
                name: "Settlement export".to_string(),
                source: "payment-api".to_string(),
                target: "ledger".to_string(),
                protocol: None,
            }]),
            &by,
        );
        doc.put_section(
            SectionPayload::EnterpriseTools(vec![EnterpriseTool {
                name: "Splunk".to_string(),
                purpose: None,
            }]),
            &by,
        );
        doc.put_section(
            SectionPayload::ProcessCompliances(vec![ProcessCompliance {
                process: "PCI-DSS".to_string(),
                status: None,
                notes: None,
            }]),
            &by,
        );
        doc
    }

    fn document_in_state(state: DocumentState) -> SolutionReviewDocument {
        let mut doc = complete_draft();
        match state {
            DocumentState::Draft => {}
            DocumentState::Submitted => {
                doc.apply_transition(Operation::Submit, &architect(), None)
                    .unwrap();
            }
            DocumentState::Approved => {
                doc.apply_transition(Operation::Submit, &architect(), None)
                    .unwrap();
                doc.apply_transition(Operation::Approve, &reviewer(), None)
                    .unwrap();
            }
            DocumentState::Current => {
                doc.apply_transition(Operation::Submit, &architect(), None)
                    .unwrap();
                doc.apply_transition(Operation::Approve, &reviewer(), None)
                    .unwrap();
                doc.apply_transition(Operation::Activate, &reviewer(), None)
                    .unwrap();
            }
            DocumentState::Outdated => {
                doc.apply_transition(Operation::Submit, &architect(), None)
                    .unwrap();
                doc.apply_transition(Operation::Approve, &reviewer(), None)
                    .unwrap();
                doc.apply_transition(Operation::Activate, &reviewer(), None)
                    .unwrap();
                doc.apply_transition(Operation::MarkOutdated, &reviewer(), None)
                    .unwrap();
            }
        }
        doc
    }

    fn command(document_id: DocumentId, operation: Operation) -> ApplyTransitionCommand {
        ApplyTransitionCommand {
            document_id,
            operation,
            concerns: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn submits_complete_draft() {
        let doc = complete_draft();
        let id = doc.id();
        let repo = Arc::new(MockDocumentRepository::with_documents(vec![doc]));
        let handler = ApplyTransitionHandler::new(repo.clone());

        let result = handler
            .handle(command(id, Operation::Submit), architect())
            .await
            .unwrap();

        assert_eq!(result.document.document_state(), DocumentState::Submitted);
        assert!(result.retired.is_none());
        assert_eq!(repo.stored(&id).document_state(), DocumentState::Submitted);
    }

    #[tokio::test]
    async fn rejects_incomplete_submission_with_missing_list() {
        let mut doc = complete_draft();
        doc.put_section(SectionPayload::DataAssets(vec![]), &architect().user_id);
        let id = doc.id();
        let repo = Arc::new(MockDocumentRepository::with_documents(vec![doc]));
        let handler = ApplyTransitionHandler::new(repo.clone());

        let err = handler
            .handle(command(id, Operation::Submit), architect())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::IncompleteDocument {
                missing: vec![SectionKey::DataAssets],
            }
        );
        assert_eq!(repo.stored(&id).document_state(), DocumentState::Draft);
    }

    #[tokio::test]
    async fn fails_when_document_not_found() {
        let repo = Arc::new(MockDocumentRepository::with_documents(vec![]));
        let handler = ApplyTransitionHandler::new(repo);

        let missing_id = DocumentId::new();
        let err = handler
            .handle(command(missing_id, Operation::Submit), architect())
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::DocumentNotFound(missing_id));
    }

    #[tokio::test]
    async fn forbids_approval_by_non_reviewer() {
        let doc = document_in_state(DocumentState::Submitted);
        let id = doc.id();
        let repo = Arc::new(MockDocumentRepository::with_documents(vec![doc]));
        let handler = ApplyTransitionHandler::new(repo.clone());

        let err = handler
            .handle(command(id, Operation::Approve), architect())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::Forbidden {
                operation: Operation::Approve,
                required: Role::Reviewer,
            }
        );
        assert_eq!(repo.stored(&id).document_state(), DocumentState::Submitted);
    }

    #[tokio::test]
    async fn approval_persists_concerns_and_state_together() {
        let doc = document_in_state(DocumentState::Submitted);
        let id = doc.id();
        let repo = Arc::new(MockDocumentRepository::with_documents(vec![doc]));
        let handler = ApplyTransitionHandler::new(repo.clone());

        let cmd = ApplyTransitionCommand {
            document_id: id,
            operation: Operation::Approve,
            concerns: Some(vec![Concern::new(
                ConcernType::Risk,
                "Single region",
                "Outage risk",
                "Add region",
            )]),
        };
        handler.handle(cmd, reviewer()).await.unwrap();

        let stored = repo.stored(&id);
        assert_eq!(stored.document_state(), DocumentState::Approved);
        assert_eq!(stored.solution_overview().unwrap().concerns.len(), 1);
    }

    #[tokio::test]
    async fn activation_retires_sibling_in_one_batch() {
        let previous = document_in_state(DocumentState::Current);
        let candidate = document_in_state(DocumentState::Approved);
        let previous_id = previous.id();
        let candidate_id = candidate.id();
        let repo = Arc::new(MockDocumentRepository::with_documents(vec![
            previous, candidate,
        ]));
        let handler = ApplyTransitionHandler::new(repo.clone());

        let result = handler
            .handle(command(candidate_id, Operation::Activate), reviewer())
            .await
            .unwrap();

        assert_eq!(result.document.document_state(), DocumentState::Current);
        assert_eq!(
            result.retired.as_ref().unwrap().document_state(),
            DocumentState::Outdated
        );
        assert_eq!(
            repo.stored(&candidate_id).document_state(),
            DocumentState::Current
        );
        assert_eq!(
            repo.stored(&previous_id).document_state(),
            DocumentState::Outdated
        );

        // Both writes landed as one batch, not two independent updates
        let batches = repo.batch_updates();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 2);
    }

    #[tokio::test]
    async fn first_activation_has_no_sibling_to_retire() {
        let candidate = document_in_state(DocumentState::Approved);
        let id = candidate.id();
        let repo = Arc::new(MockDocumentRepository::with_documents(vec![candidate]));
        let handler = ApplyTransitionHandler::new(repo.clone());

        let result = handler
            .handle(command(id, Operation::Activate), reviewer())
            .await
            .unwrap();

        assert!(result.retired.is_none());
        assert_eq!(repo.stored(&id).document_state(), DocumentState::Current);
        assert!(repo.batch_updates().is_empty());
    }

    #[tokio::test]
    async fn reset_current_also_retires_sibling() {
        let rolled_back = document_in_state(DocumentState::Outdated);
        let current = document_in_state(DocumentState::Current);
        let rolled_back_id = rolled_back.id();
        let current_id = current.id();
        let repo = Arc::new(MockDocumentRepository::with_documents(vec![
            rolled_back,
            current,
        ]));
        let handler = ApplyTransitionHandler::new(repo.clone());

        handler
            .handle(command(rolled_back_id, Operation::ResetCurrent), reviewer())
            .await
            .unwrap();

        assert_eq!(
            repo.stored(&rolled_back_id).document_state(),
            DocumentState::Current
        );
        assert_eq!(
            repo.stored(&current_id).document_state(),
            DocumentState::Outdated
        );
    }

    #[tokio::test]
    async fn storage_failure_surfaces_and_leaves_store_unchanged() {
        let doc = complete_draft();
        let id = doc.id();
        let repo = Arc::new(MockDocumentRepository::failing_with_documents(vec![doc]));
        let handler = ApplyTransitionHandler::new(repo.clone());

        let err = handler
            .handle(command(id, Operation::Submit), architect())
            .await
            .unwrap_err();

        assert!(err.is_retryable());
        assert_eq!(repo.stored(&id).document_state(), DocumentState::Draft);
    }

    #[tokio::test]
    async fn failed_activation_batch_fails_the_whole_operation() {
        let previous = document_in_state(DocumentState::Current);
        let candidate = document_in_state(DocumentState::Approved);
        let previous_id = previous.id();
        let candidate_id = candidate.id();
        let repo = Arc::new(MockDocumentRepository::failing_with_documents(vec![
            previous, candidate,
        ]));
        let handler = ApplyTransitionHandler::new(repo.clone());

        let err = handler
            .handle(command(candidate_id, Operation::Activate), reviewer())
            .await
            .unwrap_err();

        assert!(err.is_retryable());
        // Neither document moved
        assert_eq!(
            repo.stored(&candidate_id).document_state(),
            DocumentState::Approved
        );
        assert_eq!(
            repo.stored(&previous_id).document_state(),
            DocumentState::Current
        );
    }
}

//! SolutionReviewDocument aggregate - one versioned review record.
//!
//! The aggregate owns the eight content sections, the lifecycle state,
//! and the audit stamps. State only ever changes through
//! [`SolutionReviewDocument::apply_transition`]; section content changes
//! through [`SolutionReviewDocument::put_section`] (the draft store) or
//! the concern merge inside an approval.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Actor, DocumentId, SystemCode, Timestamp, UserId};

use super::{
    completeness, transitions, BusinessCapability, Concern, DataAsset, DocumentState, DomainError,
    EnterpriseTool, IntegrationFlow, Operation, ProcessCompliance, SectionPayload,
    SolutionOverview, SystemComponent, TechnologyComponent, Transition,
};

/// The SolutionReviewDocument aggregate root.
///
/// Many documents may share a `system_code`; together they are that
/// system's version history, of which at most one is `Current`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionReviewDocument {
    // Identity
    id: DocumentId,
    system_code: SystemCode,
    document_state: DocumentState,

    // Content sections, each independently nullable so the editor can
    // save one step at a time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    solution_overview: Option<SolutionOverview>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    business_capabilities: Option<Vec<BusinessCapability>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data_assets: Option<Vec<DataAsset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    system_components: Option<Vec<SystemComponent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    technology_components: Option<Vec<TechnologyComponent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    integration_flows: Option<Vec<IntegrationFlow>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    enterprise_tools: Option<Vec<EnterpriseTool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    process_compliances: Option<Vec<ProcessCompliance>>,

    // Audit stamps
    created_at: Timestamp,
    created_by: UserId,
    last_modified_at: Timestamp,
    last_modified_by: UserId,
}

impl SolutionReviewDocument {
    // ════════════════════════════════════════════════════════════════════════════════
    // Construction
    // ════════════════════════════════════════════════════════════════════════════════

    /// Creates a fresh draft with no section content.
    pub fn new(system_code: SystemCode, created_by: UserId) -> Self {
        let now = Timestamp::now();

        Self {
            id: DocumentId::new(),
            system_code,
            document_state: DocumentState::Draft,
            solution_overview: None,
            business_capabilities: None,
            data_assets: None,
            system_components: None,
            technology_components: None,
            integration_flows: None,
            enterprise_tools: None,
            process_compliances: None,
            created_at: now,
            created_by: created_by.clone(),
            last_modified_at: now,
            last_modified_by: created_by,
        }
    }

    /// Reconstitutes a document from persistence.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: DocumentId,
        system_code: SystemCode,
        document_state: DocumentState,
        solution_overview: Option<SolutionOverview>,
        business_capabilities: Option<Vec<BusinessCapability>>,
        data_assets: Option<Vec<DataAsset>>,
        system_components: Option<Vec<SystemComponent>>,
        technology_components: Option<Vec<TechnologyComponent>>,
        integration_flows: Option<Vec<IntegrationFlow>>,
        enterprise_tools: Option<Vec<EnterpriseTool>>,
        process_compliances: Option<Vec<ProcessCompliance>>,
        created_at: Timestamp,
        created_by: UserId,
        last_modified_at: Timestamp,
        last_modified_by: UserId,
    ) -> Self {
        Self {
            id,
            system_code,
            document_state,
            solution_overview,
            business_capabilities,
            data_assets,
            system_components,
            technology_components,
            integration_flows,
            enterprise_tools,
            process_compliances,
            created_at,
            created_by,
            last_modified_at,
            last_modified_by,
        }
    }

    /// Deep-copies the eight sections into a new draft with a fresh id.
    ///
    /// This is how a new version is started from the current one: all
    /// content carries over, state resets to `Draft`, and the audit trail
    /// starts again with `created_by`.
    pub fn clone_as_draft(&self, created_by: UserId) -> Self {
        let now = Timestamp::now();

        Self {
            id: DocumentId::new(),
            system_code: self.system_code.clone(),
            document_state: DocumentState::Draft,
            solution_overview: self.solution_overview.clone(),
            business_capabilities: self.business_capabilities.clone(),
            data_assets: self.data_assets.clone(),
            system_components: self.system_components.clone(),
            technology_components: self.technology_components.clone(),
            integration_flows: self.integration_flows.clone(),
            enterprise_tools: self.enterprise_tools.clone(),
            process_compliances: self.process_compliances.clone(),
            created_at: now,
            created_by: created_by.clone(),
            last_modified_at: now,
            last_modified_by: created_by,
        }
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Accessors
    // ════════════════════════════════════════════════════════════════════════════════

    /// Returns the document ID.
    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// Returns the system this document describes.
    pub fn system_code(&self) -> &SystemCode {
        &self.system_code
    }

    /// Returns the lifecycle state.
    pub fn document_state(&self) -> DocumentState {
        self.document_state
    }

    /// Returns the solution overview section, if saved.
    pub fn solution_overview(&self) -> Option<&SolutionOverview> {
        self.solution_overview.as_ref()
    }

    /// Returns the business capabilities section, if saved.
    pub fn business_capabilities(&self) -> Option<&[BusinessCapability]> {
        self.business_capabilities.as_deref()
    }

    /// Returns the data assets section, if saved.
    pub fn data_assets(&self) -> Option<&[DataAsset]> {
        self.data_assets.as_deref()
    }

    /// Returns the system components section, if saved.
    pub fn system_components(&self) -> Option<&[SystemComponent]> {
        self.system_components.as_deref()
    }

    /// Returns the technology components section, if saved.
    pub fn technology_components(&self) -> Option<&[TechnologyComponent]> {
        self.technology_components.as_deref()
    }

    /// Returns the integration flows section, if saved.
    pub fn integration_flows(&self) -> Option<&[IntegrationFlow]> {
        self.integration_flows.as_deref()
    }

    /// Returns the enterprise tools section, if saved.
    pub fn enterprise_tools(&self) -> Option<&[EnterpriseTool]> {
        self.enterprise_tools.as_deref()
    }

    /// Returns the process compliance section, if saved.
    pub fn process_compliances(&self) -> Option<&[ProcessCompliance]> {
        self.process_compliances.as_deref()
    }

    /// Returns when this document was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns who created this document.
    pub fn created_by(&self) -> &UserId {
        &self.created_by
    }

    /// Returns when this document was last modified.
    pub fn last_modified_at(&self) -> Timestamp {
        self.last_modified_at
    }

    /// Returns who last modified this document.
    pub fn last_modified_by(&self) -> &UserId {
        &self.last_modified_by
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Mutations
    // ════════════════════════════════════════════════════════════════════════════════

    /// Writes one section, leaving the other seven and the state untouched.
    ///
    /// This is the draft store's write path; the editor wizard calls it
    /// once per step.
    pub fn put_section(&mut self, payload: SectionPayload, saved_by: &UserId) {
        match payload {
            SectionPayload::SolutionOverview(v) => self.solution_overview = Some(v),
            SectionPayload::BusinessCapabilities(v) => self.business_capabilities = Some(v),
            SectionPayload::DataAssets(v) => self.data_assets = Some(v),
            SectionPayload::SystemComponents(v) => self.system_components = Some(v),
            SectionPayload::TechnologyComponents(v) => self.technology_components = Some(v),
            SectionPayload::IntegrationFlows(v) => self.integration_flows = Some(v),
            SectionPayload::EnterpriseTools(v) => self.enterprise_tools = Some(v),
            SectionPayload::ProcessCompliances(v) => self.process_compliances = Some(v),
        }
        self.touch(saved_by);
    }

    /// Validates and applies one lifecycle operation.
    ///
    /// Checks run in order: transition lookup, role, submit completeness,
    /// approve concern merge. Nothing mutates until every check has
    /// passed, so a failed call leaves the document exactly as it was.
    /// A concerns payload is only meaningful for `Approve` and is ignored
    /// elsewhere.
    ///
    /// Returns the applied transition so callers can react to its target
    /// state (activation triggers sibling retirement).
    pub fn apply_transition(
        &mut self,
        operation: Operation,
        actor: &Actor,
        concerns: Option<Vec<Concern>>,
    ) -> Result<&'static Transition, DomainError> {
        let transition = transitions::find_transition(self.document_state, operation).ok_or(
            DomainError::InvalidTransition {
                from: self.document_state,
                operation,
            },
        )?;

        if let Some(required) = transition.required_role {
            if !actor.has_role(required) {
                return Err(DomainError::Forbidden {
                    operation,
                    required,
                });
            }
        }

        match operation {
            Operation::Submit => {
                let missing = completeness::missing_sections(self);
                if !missing.is_empty() {
                    return Err(DomainError::IncompleteDocument { missing });
                }
            }
            Operation::Approve => {
                if let Some(concerns) = concerns {
                    let overview = self
                        .solution_overview
                        .as_mut()
                        .ok_or(DomainError::MissingOverview)?;
                    overview.append_concerns(concerns);
                }
            }
            Operation::RemoveSubmission
            | Operation::Unapprove
            | Operation::Activate
            | Operation::MarkOutdated
            | Operation::ResetCurrent => {}
        }

        self.document_state = transition.to;
        self.touch(&actor.user_id);

        Ok(transition)
    }

    fn touch(&mut self, user_id: &UserId) {
        self.last_modified_at = Timestamp::now();
        self.last_modified_by = user_id.clone();
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

//! The eight content sections of a solution review document.
//!
//! Each section is independently nullable on the document so the editor
//! wizard can save one step at a time. `SectionKey` names the sections in
//! their fixed scan order; `SectionPayload` carries one typed section
//! value through the draft-store write path.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Concern;

/// Names one of the eight content sections, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    SolutionOverview,
    BusinessCapabilities,
    DataAssets,
    SystemComponents,
    TechnologyComponents,
    IntegrationFlows,
    EnterpriseTools,
    ProcessCompliances,
}

impl SectionKey {
    /// Returns all section keys in canonical scan order.
    ///
    /// This order fixes the order of missing-section reports.
    pub fn all() -> &'static [SectionKey] {
        &[
            SectionKey::SolutionOverview,
            SectionKey::BusinessCapabilities,
            SectionKey::DataAssets,
            SectionKey::SystemComponents,
            SectionKey::TechnologyComponents,
            SectionKey::IntegrationFlows,
            SectionKey::EnterpriseTools,
            SectionKey::ProcessCompliances,
        ]
    }

    /// Returns the wire key of this section (matches the serialized
    /// document field name).
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::SolutionOverview => "solutionOverview",
            SectionKey::BusinessCapabilities => "businessCapabilities",
            SectionKey::DataAssets => "dataAssets",
            SectionKey::SystemComponents => "systemComponents",
            SectionKey::TechnologyComponents => "technologyComponents",
            SectionKey::IntegrationFlows => "integrationFlows",
            SectionKey::EnterpriseTools => "enterpriseTools",
            SectionKey::ProcessCompliances => "processCompliances",
        }
    }

    /// Returns the human-readable label shown in missing-section reports.
    pub fn label(&self) -> &'static str {
        match self {
            SectionKey::SolutionOverview => "Solution Overview",
            SectionKey::BusinessCapabilities => "Business Capabilities",
            SectionKey::DataAssets => "Data & Assets",
            SectionKey::SystemComponents => "System Components",
            SectionKey::TechnologyComponents => "Technology Components",
            SectionKey::IntegrationFlows => "Integration Flows",
            SectionKey::EnterpriseTools => "Enterprise Tools",
            SectionKey::ProcessCompliances => "Process Compliance",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Narrative overview of the solution under review.
///
/// The only object-shaped section; also the home of reviewer concerns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionOverview {
    /// What the solution is and why it exists.
    pub summary: String,

    /// Business context the solution operates in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_context: Option<String>,

    /// Boundaries of what the solution covers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution_scope: Option<String>,

    /// Reviewer concerns recorded against this document.
    #[serde(default)]
    pub concerns: Vec<Concern>,
}

impl SolutionOverview {
    /// Creates an overview with no concerns.
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            business_context: None,
            solution_scope: None,
            concerns: Vec::new(),
        }
    }

    /// Appends reviewer concerns, preserving any already present.
    pub fn append_concerns(&mut self, concerns: impl IntoIterator<Item = Concern>) {
        self.concerns.extend(concerns);
    }
}

/// A business capability the solution realizes or supports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessCapability {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A data asset the solution owns or consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataAsset {
    pub name: String,
    /// Sensitivity classification, e.g. "internal", "confidential".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A deployable component of the solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemComponent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsibility: Option<String>,
}

/// A technology product or platform the solution is built on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyComponent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A data flow between this solution and another system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationFlow {
    pub name: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

/// An enterprise-standard tool the solution relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseTool {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

/// Compliance posture against one governed process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessCompliance {
    pub process: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One typed section value on its way into a document.
///
/// The draft store accepts exactly one of these per save, so the editor
/// can persist a single wizard step without touching the other seven.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionPayload {
    SolutionOverview(SolutionOverview),
    BusinessCapabilities(Vec<BusinessCapability>),
    DataAssets(Vec<DataAsset>),
    SystemComponents(Vec<SystemComponent>),
    TechnologyComponents(Vec<TechnologyComponent>),
    IntegrationFlows(Vec<IntegrationFlow>),
    EnterpriseTools(Vec<EnterpriseTool>),
    ProcessCompliances(Vec<ProcessCompliance>),
}

impl SectionPayload {
    /// Returns the key of the section this payload fills.
    pub fn key(&self) -> SectionKey {
        match self {
            SectionPayload::SolutionOverview(_) => SectionKey::SolutionOverview,
            SectionPayload::BusinessCapabilities(_) => SectionKey::BusinessCapabilities,
            SectionPayload::DataAssets(_) => SectionKey::DataAssets,
            SectionPayload::SystemComponents(_) => SectionKey::SystemComponents,
            SectionPayload::TechnologyComponents(_) => SectionKey::TechnologyComponents,
            SectionPayload::IntegrationFlows(_) => SectionKey::IntegrationFlows,
            SectionPayload::EnterpriseTools(_) => SectionKey::EnterpriseTools,
            SectionPayload::ProcessCompliances(_) => SectionKey::ProcessCompliances,
        }
    }
}

//! Completeness evaluation: which sections still need content.
//!
//! Single source of truth for "what is missing" - the submission gate and
//! any read-only checklist both call [`missing_sections`], so they can
//! never disagree about the same document.
//!
//! A section is missing when its value is absent, or - for sequence
//! sections - present but empty. The two shapes get explicit predicates
//! rather than a duck-typed check.

use super::{SectionKey, SolutionReviewDocument};

/// An object-shaped section is missing iff it was never saved.
pub fn object_section_missing<T>(section: Option<&T>) -> bool {
    section.is_none()
}

/// A sequence-shaped section is missing iff it was never saved or has
/// zero elements.
pub fn sequence_section_missing<T>(section: Option<&[T]>) -> bool {
    section.map_or(true, |items| items.is_empty())
}

/// Returns true if the named section of the document is missing.
pub fn section_missing(document: &SolutionReviewDocument, key: SectionKey) -> bool {
    match key {
        SectionKey::SolutionOverview => object_section_missing(document.solution_overview()),
        SectionKey::BusinessCapabilities => {
            sequence_section_missing(document.business_capabilities())
        }
        SectionKey::DataAssets => sequence_section_missing(document.data_assets()),
        SectionKey::SystemComponents => sequence_section_missing(document.system_components()),
        SectionKey::TechnologyComponents => {
            sequence_section_missing(document.technology_components())
        }
        SectionKey::IntegrationFlows => sequence_section_missing(document.integration_flows()),
        SectionKey::EnterpriseTools => sequence_section_missing(document.enterprise_tools()),
        SectionKey::ProcessCompliances => sequence_section_missing(document.process_compliances()),
    }
}

/// Returns the missing sections of a document in canonical order.
///
/// Deterministic and side-effect-free; identity, system code, and
/// lifecycle state are not part of the scan.
pub fn missing_sections(document: &SolutionReviewDocument) -> Vec<SectionKey> {
    SectionKey::all()
        .iter()
        .copied()
        .filter(|key| section_missing(document, *key))
        .collect()
}

/// Returns the human-readable labels of the missing sections, in the
/// same canonical order.
pub fn missing_section_labels(document: &SolutionReviewDocument) -> Vec<&'static str> {
    missing_sections(document)
        .into_iter()
        .map(|key| key.label())
        .collect()
}

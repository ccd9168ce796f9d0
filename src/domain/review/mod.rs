//! Review module - the solution review bounded context.
//!
//! Owns the document aggregate, the eight content sections, reviewer
//! concerns, the lifecycle state machine, and completeness evaluation.

pub mod completeness;
mod concern;
mod document;
mod errors;
mod sections;
mod state;
pub mod transitions;

pub use concern::{Concern, ConcernStatus, ConcernType};
pub use document::SolutionReviewDocument;
pub use errors::DomainError;
pub use sections::{
    BusinessCapability, DataAsset, EnterpriseTool, IntegrationFlow, ProcessCompliance,
    SectionKey, SectionPayload, SolutionOverview, SystemComponent, TechnologyComponent,
};
pub use state::DocumentState;
pub use transitions::{available_transitions, find_transition, Operation, Transition};

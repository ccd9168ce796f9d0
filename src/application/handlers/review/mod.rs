//! Review command and query handlers.
//!
//! One handler per boundary operation; each takes the explicit `Actor`
//! performing it and talks to storage only through the
//! `DocumentRepository` port.

mod apply_transition;
mod create_draft;
mod get_document;
mod list_documents;
mod list_operations;
mod save_section;

pub use apply_transition::{ApplyTransitionCommand, ApplyTransitionHandler, ApplyTransitionResult};
pub use create_draft::{CreateDraftCommand, CreateDraftHandler};
pub use get_document::{GetDocumentHandler, GetDocumentQuery};
pub use list_documents::{ListDocumentsHandler, ListDocumentsQuery};
pub use list_operations::{ListOperationsHandler, ListOperationsQuery};
pub use save_section::{SaveSectionCommand, SaveSectionHandler};

//! Adapters - Concrete implementations of the ports.

pub mod storage;

pub use storage::{FileDocumentStore, InMemoryDocumentStore};

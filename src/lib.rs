//! Solution Review - Enterprise Architecture Review Lifecycle
//!
//! This crate implements the lifecycle of Solution Review documents:
//! section-by-section drafting, a completeness-gated submission, reviewer
//! approval with attached concerns, and systemCode-scoped versioning with
//! a single current version per system.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into add/delete/list entry points.
//! - Keep presentation callers decoupled from collection details.

pub mod homework_store;
pub mod shared_store;

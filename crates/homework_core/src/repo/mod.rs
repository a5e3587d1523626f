//! Repository layer for the session homework collection.
//!
//! # Responsibility
//! - Define the ordered collection contract used by the store.
//! - Provide the in-memory implementation; nothing is persisted.
//!
//! # Invariants
//! - Repositories never validate; items arrive already validated by the store.

pub mod homework_repo;

//! Homework domain model.
//!
//! # Responsibility
//! - Define the fixed subject catalog and the homework record.
//! - Own every field-level validation rule.
//!
//! # Invariants
//! - Every stored item is identified by a stable `HomeworkId`.
//! - Subjects are a closed enumeration, never open strings.

pub mod homework;
pub mod subject;

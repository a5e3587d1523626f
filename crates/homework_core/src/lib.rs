//! Core domain logic for the homework list.
//! This crate is the single source of truth for homework invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::homework::{
    parse_due_date, HomeworkDraft, HomeworkId, HomeworkItem, HomeworkValidationError,
    ValidatedHomework, DUE_DATE_FORMAT,
};
pub use model::subject::{parse_subject, Subject, SubjectParseError, SUBJECTS};
pub use repo::homework_repo::{HomeworkRepository, InMemoryHomeworkRepository};
pub use service::homework_store::{HomeworkBySubject, HomeworkStore};
pub use service::shared_store::SharedHomeworkStore;

/// Minimal health-check API for linkage probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

//! Fixed subject catalog.
//!
//! # Responsibility
//! - Define the closed set of homework subjects.
//! - Provide the canonical ordering shared by grouping and form options.
//!
//! # Invariants
//! - The set is closed: no subject can be created at runtime.
//! - `SUBJECTS` order is the display order for grouped views.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Homework category.
///
/// Variant declaration order matches `SUBJECTS`, so `Ord` yields the
/// canonical display order.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Subject {
    Telugu,
    Hindi,
    English,
    Maths,
    /// Physical science.
    PS,
    /// Natural science.
    NS,
    Social,
}

/// All subjects in canonical order.
pub const SUBJECTS: [Subject; 7] = [
    Subject::Telugu,
    Subject::Hindi,
    Subject::English,
    Subject::Maths,
    Subject::PS,
    Subject::NS,
    Subject::Social,
];

impl Subject {
    /// Stable label used for display and serialization.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Telugu => "Telugu",
            Self::Hindi => "Hindi",
            Self::English => "English",
            Self::Maths => "Maths",
            Self::PS => "PS",
            Self::NS => "NS",
            Self::Social => "Social",
        }
    }
}

impl Display for Subject {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subject label parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectParseError {
    Empty,
    Unknown(String),
}

impl Display for SubjectParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "subject must not be empty"),
            Self::Unknown(value) => write!(f, "unknown subject: `{value}`"),
        }
    }
}

impl Error for SubjectParseError {}

impl FromStr for Subject {
    type Err = SubjectParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_subject(value)
    }
}

/// Parses one subject from its exact label.
///
/// Surrounding whitespace is ignored; matching is case-sensitive.
pub fn parse_subject(value: &str) -> Result<Subject, SubjectParseError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(SubjectParseError::Empty);
    }

    SUBJECTS
        .iter()
        .copied()
        .find(|subject| subject.as_str() == normalized)
        .ok_or_else(|| SubjectParseError::Unknown(normalized.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{parse_subject, Subject, SubjectParseError, SUBJECTS};

    #[test]
    fn subjects_are_in_declaration_order() {
        let mut sorted = SUBJECTS;
        sorted.sort();
        assert_eq!(sorted, SUBJECTS);
    }

    #[test]
    fn parse_accepts_every_label() {
        for subject in SUBJECTS {
            assert_eq!(parse_subject(subject.as_str()), Ok(subject));
        }
        assert_eq!(parse_subject("  PS "), Ok(Subject::PS));
    }

    #[test]
    fn parse_rejects_unknown_and_empty() {
        assert_eq!(parse_subject("   "), Err(SubjectParseError::Empty));
        assert_eq!(
            parse_subject("maths"),
            Err(SubjectParseError::Unknown("maths".to_string()))
        );
        assert_eq!(
            "Physics".parse::<Subject>(),
            Err(SubjectParseError::Unknown("Physics".to_string()))
        );
    }
}

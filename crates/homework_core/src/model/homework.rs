//! Homework item domain model.
//!
//! # Responsibility
//! - Define the immutable homework record and its validation rules.
//! - Validate raw form input (`HomeworkDraft`) into typed values.
//!
//! # Invariants
//! - `id` is generated once and never reused for another item.
//! - `task` is never blank; it is stored trimmed.
//! - `due_date` is a calendar date, never a display string.
//! - Items expose read-only accessors; there is no in-place mutation.

use crate::model::subject::{parse_subject, Subject, SubjectParseError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one homework item.
pub type HomeworkId = Uuid;

/// Accepted due date input format (`YYYY-MM-DD`, as produced by date inputs).
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation failures for homework creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeworkValidationError {
    /// No subject was selected.
    MissingSubject,
    /// Subject label is outside the fixed subject set.
    UnknownSubject(String),
    /// Task text is empty after trim.
    EmptyTask,
    /// No due date was provided.
    MissingDueDate,
    /// Due date is not a valid calendar date.
    InvalidDueDate(String),
    /// Externally provided id is the nil UUID.
    NilId,
}

impl Display for HomeworkValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSubject => write!(f, "subject is required"),
            Self::UnknownSubject(value) => write!(f, "unknown subject: `{value}`"),
            Self::EmptyTask => write!(f, "task must not be blank"),
            Self::MissingDueDate => write!(f, "due date is required"),
            Self::InvalidDueDate(value) => {
                write!(f, "invalid due date `{value}`; expected YYYY-MM-DD")
            }
            Self::NilId => write!(f, "homework id must not be nil"),
        }
    }
}

impl HomeworkValidationError {
    /// Stable metadata-only reason code for diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingSubject => "missing_subject",
            Self::UnknownSubject(_) => "unknown_subject",
            Self::EmptyTask => "empty_task",
            Self::MissingDueDate => "missing_due_date",
            Self::InvalidDueDate(_) => "invalid_due_date",
            Self::NilId => "nil_id",
        }
    }
}

impl Error for HomeworkValidationError {}

impl From<SubjectParseError> for HomeworkValidationError {
    fn from(value: SubjectParseError) -> Self {
        match value {
            SubjectParseError::Empty => Self::MissingSubject,
            SubjectParseError::Unknown(label) => Self::UnknownSubject(label),
        }
    }
}

/// One homework assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HomeworkItemWire")]
pub struct HomeworkItem {
    id: HomeworkId,
    subject: Subject,
    task: String,
    due_date: NaiveDate,
}

impl HomeworkItem {
    /// Creates a new item with a freshly generated id.
    ///
    /// # Errors
    /// - `EmptyTask` when `task` is blank after trim.
    pub fn new(
        subject: Subject,
        task: impl Into<String>,
        due_date: NaiveDate,
    ) -> Result<Self, HomeworkValidationError> {
        Self::with_id(Uuid::new_v4(), subject, task, due_date)
    }

    /// Creates an item with a caller-provided id.
    ///
    /// Used when identity already exists outside the store (deserialization).
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `EmptyTask` when `task` is blank after trim.
    pub fn with_id(
        id: HomeworkId,
        subject: Subject,
        task: impl Into<String>,
        due_date: NaiveDate,
    ) -> Result<Self, HomeworkValidationError> {
        if id.is_nil() {
            return Err(HomeworkValidationError::NilId);
        }
        let task = normalize_task(task.into())?;
        Ok(Self {
            id,
            subject,
            task,
            due_date,
        })
    }

    pub fn id(&self) -> HomeworkId {
        self.id
    }

    pub fn subject(&self) -> Subject {
        self.subject
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}

#[derive(Deserialize)]
struct HomeworkItemWire {
    id: HomeworkId,
    subject: Subject,
    task: String,
    due_date: NaiveDate,
}

impl TryFrom<HomeworkItemWire> for HomeworkItem {
    type Error = HomeworkValidationError;

    fn try_from(value: HomeworkItemWire) -> Result<Self, Self::Error> {
        Self::with_id(value.id, value.subject, value.task, value.due_date)
    }
}

/// Raw homework form input, as collected by a presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeworkDraft {
    /// Subject label; empty when nothing is selected.
    pub subject: String,
    /// Free-text task description.
    pub task: String,
    /// Due date in `YYYY-MM-DD`; empty when unset.
    pub due_date: String,
}

/// Typed values produced by a successfully validated draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedHomework {
    pub subject: Subject,
    pub task: String,
    pub due_date: NaiveDate,
}

impl HomeworkDraft {
    pub fn new(
        subject: impl Into<String>,
        task: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            task: task.into(),
            due_date: due_date.into(),
        }
    }

    /// Validates all fields, checking subject, task, then due date.
    pub fn validate(&self) -> Result<ValidatedHomework, HomeworkValidationError> {
        let subject = parse_subject(&self.subject)?;
        let task = normalize_task(self.task.clone())?;
        let due_date = parse_due_date(&self.due_date)?;
        Ok(ValidatedHomework {
            subject,
            task,
            due_date,
        })
    }

    /// Returns whether a form holding this draft may be submitted.
    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Parses a due date from `YYYY-MM-DD` input.
///
/// # Errors
/// - `MissingDueDate` when the input is blank.
/// - `InvalidDueDate` when the input is not a real calendar date.
pub fn parse_due_date(value: &str) -> Result<NaiveDate, HomeworkValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(HomeworkValidationError::MissingDueDate);
    }
    NaiveDate::parse_from_str(trimmed, DUE_DATE_FORMAT)
        .map_err(|_| HomeworkValidationError::InvalidDueDate(trimmed.to_string()))
}

fn normalize_task(task: String) -> Result<String, HomeworkValidationError> {
    let trimmed = task.trim();
    if trimmed.is_empty() {
        return Err(HomeworkValidationError::EmptyTask);
    }
    if trimmed.len() == task.len() {
        return Ok(task);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{parse_due_date, HomeworkDraft, HomeworkItem, HomeworkValidationError};
    use crate::model::subject::Subject;
    use chrono::NaiveDate;

    #[test]
    fn new_trims_task_text() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        let item = HomeworkItem::new(Subject::Maths, "  page 45 \n", date).unwrap();
        assert_eq!(item.task(), "page 45");
    }

    #[test]
    fn parse_due_date_rejects_impossible_dates() {
        assert_eq!(
            parse_due_date("2023-02-30"),
            Err(HomeworkValidationError::InvalidDueDate(
                "2023-02-30".to_string()
            ))
        );
        assert_eq!(
            parse_due_date(" "),
            Err(HomeworkValidationError::MissingDueDate)
        );
    }

    #[test]
    fn draft_reports_subject_before_other_fields() {
        let draft = HomeworkDraft::default();
        assert_eq!(
            draft.validate(),
            Err(HomeworkValidationError::MissingSubject)
        );
        assert!(!draft.is_submittable());
    }
}

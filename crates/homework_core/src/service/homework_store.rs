//! Homework store use-cases.
//!
//! # Responsibility
//! - Provide add/delete/list entry points for the presentation layer.
//! - Allocate unique ids and derive the per-subject grouped view.
//!
//! # Invariants
//! - Every operation is all-or-nothing; failed calls leave the collection
//!   untouched.
//! - `list_by_subject` is recomputed from the collection on every call and
//!   always contains every subject.
//! - Grouping filters in insertion order; it never sorts.

use crate::model::homework::{HomeworkDraft, HomeworkId, HomeworkItem, HomeworkValidationError};
use crate::model::subject::{Subject, SUBJECTS};
use crate::repo::homework_repo::{HomeworkRepository, InMemoryHomeworkRepository};
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Grouped view keyed by subject, iterating in canonical subject order.
pub type HomeworkBySubject = BTreeMap<Subject, Vec<HomeworkItem>>;

/// Session-scoped homework store.
#[derive(Debug, Clone)]
pub struct HomeworkStore<R: HomeworkRepository = InMemoryHomeworkRepository> {
    repo: R,
}

impl HomeworkStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::with_repository(InMemoryHomeworkRepository::new())
    }
}

impl Default for HomeworkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: HomeworkRepository> HomeworkStore<R> {
    /// Creates a store over the provided repository implementation.
    pub fn with_repository(repo: R) -> Self {
        Self { repo }
    }

    /// Adds one homework item at the end of the collection.
    ///
    /// # Contract
    /// - Returns the stored item, including its generated id.
    /// - The stored `task()` is the input with surrounding whitespace
    ///   trimmed.
    /// - Collection length grows by exactly one on success.
    ///
    /// # Errors
    /// - `EmptyTask` when `task` is blank after trim.
    pub fn add(
        &mut self,
        subject: Subject,
        task: impl Into<String>,
        due_date: NaiveDate,
    ) -> Result<HomeworkItem, HomeworkValidationError> {
        let id = self.fresh_id(&[]);
        let item = HomeworkItem::with_id(id, subject, task, due_date)
            .inspect_err(|err| log_rejected("homework_add", err))?;

        self.repo.append(vec![item.clone()]);
        info!(
            "event=homework_add module=store status=ok subject={} total={}",
            subject,
            self.len()
        );
        Ok(item)
    }

    /// Validates raw form input and adds it.
    ///
    /// # Errors
    /// - Subject, task, or due date validation failures, reported in that
    ///   order.
    pub fn add_draft(
        &mut self,
        draft: &HomeworkDraft,
    ) -> Result<HomeworkItem, HomeworkValidationError> {
        let validated = draft
            .validate()
            .inspect_err(|err| log_rejected("homework_add", err))?;
        self.add(validated.subject, validated.task, validated.due_date)
    }

    /// Seeds the store from an initial load.
    ///
    /// Every draft is validated before anything is inserted; one invalid
    /// draft rejects the whole batch.
    pub fn seed<I>(&mut self, drafts: I) -> Result<Vec<HomeworkItem>, HomeworkValidationError>
    where
        I: IntoIterator<Item = HomeworkDraft>,
    {
        let mut items = Vec::new();
        let mut reserved = Vec::new();
        for draft in drafts {
            let validated = draft
                .validate()
                .inspect_err(|err| log_rejected("homework_seed", err))?;
            let id = self.fresh_id(&reserved);
            reserved.push(id);
            items.push(HomeworkItem::with_id(
                id,
                validated.subject,
                validated.task,
                validated.due_date,
            )?);
        }

        self.repo.append(items.clone());
        info!(
            "event=homework_seed module=store status=ok seeded={} total={}",
            items.len(),
            self.len()
        );
        Ok(items)
    }

    /// Deletes one item by its string id.
    ///
    /// Ids match only in the exact form returned by `add` (lowercase,
    /// hyphenated). Returns `false` when no item matches, including other
    /// spellings of a stored id. Repeated deletes are no-ops.
    pub fn delete(&mut self, id: &str) -> bool {
        match parse_exact_id(id) {
            Some(parsed) => self.delete_by_id(parsed),
            None => {
                debug!("event=homework_delete module=store status=miss reason=malformed_id");
                false
            }
        }
    }

    /// Deletes one item by typed id.
    pub fn delete_by_id(&mut self, id: HomeworkId) -> bool {
        match self.repo.remove(id) {
            Some(removed) => {
                info!(
                    "event=homework_delete module=store status=ok subject={} total={}",
                    removed.subject(),
                    self.len()
                );
                true
            }
            None => {
                debug!("event=homework_delete module=store status=miss reason=not_found");
                false
            }
        }
    }

    /// Groups the current collection by subject.
    ///
    /// Every subject is present, with an empty vector when it has no items.
    pub fn list_by_subject(&self) -> HomeworkBySubject {
        let mut grouped: HomeworkBySubject = SUBJECTS
            .iter()
            .map(|subject| (*subject, Vec::new()))
            .collect();
        for item in self.repo.items() {
            grouped
                .entry(item.subject())
                .or_default()
                .push(item.clone());
        }
        grouped
    }

    /// Items of one subject in insertion order.
    pub fn items_for(&self, subject: Subject) -> Vec<HomeworkItem> {
        self.repo
            .items()
            .iter()
            .filter(|item| item.subject() == subject)
            .cloned()
            .collect()
    }

    /// Looks up one item by its exact string id.
    pub fn get(&self, id: &str) -> Option<&HomeworkItem> {
        let parsed = parse_exact_id(id)?;
        self.repo.get(parsed)
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[HomeworkItem] {
        self.repo.items()
    }

    pub fn len(&self) -> usize {
        self.repo.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.items().is_empty()
    }

    fn fresh_id(&self, reserved: &[HomeworkId]) -> HomeworkId {
        loop {
            let id = Uuid::new_v4();
            if !self.repo.contains(id) && !reserved.contains(&id) {
                return id;
            }
        }
    }
}

/// Parses an id only when `id` is its canonical rendering.
fn parse_exact_id(id: &str) -> Option<HomeworkId> {
    let parsed = Uuid::parse_str(id).ok()?;
    let mut buf = Uuid::encode_buffer();
    (parsed.hyphenated().encode_lower(&mut buf) == id).then_some(parsed)
}

fn log_rejected(event: &str, err: &HomeworkValidationError) {
    warn!(
        "event={} module=store status=rejected reason={}",
        event,
        err.code()
    );
}

#[cfg(test)]
mod tests {
    use super::HomeworkStore;
    use crate::model::homework::HomeworkValidationError;
    use crate::model::subject::{Subject, SUBJECTS};
    use chrono::NaiveDate;

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()
    }

    #[test]
    fn empty_store_lists_every_subject() {
        let store = HomeworkStore::new();
        let grouped = store.list_by_subject();
        assert_eq!(grouped.keys().copied().collect::<Vec<_>>(), SUBJECTS);
        assert!(grouped.values().all(Vec::is_empty));
    }

    #[test]
    fn blank_task_leaves_collection_unchanged() {
        let mut store = HomeworkStore::new();
        store.add(Subject::Hindi, "poem", due()).unwrap();
        let before = store.list_by_subject();

        let err = store.add(Subject::Hindi, " \t ", due()).unwrap_err();
        assert_eq!(err, HomeworkValidationError::EmptyTask);
        assert_eq!(store.list_by_subject(), before);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_ignores_malformed_ids() {
        let mut store = HomeworkStore::new();
        store.add(Subject::NS, "leaf study", due()).unwrap();
        assert!(!store.delete("1"));
        assert!(!store.delete(""));
        assert_eq!(store.len(), 1);
    }
}

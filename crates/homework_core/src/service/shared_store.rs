//! Thread-shareable store handle.
//!
//! # Responsibility
//! - Serialize every store call behind one mutex for multi-threaded callers.
//! - Serve read views as snapshots taken under the lock.
//!
//! # Invariants
//! - No caller observes a partially applied add, seed, or delete.
//! - A poisoned lock is recovered: store operations are all-or-nothing, so
//!   the guarded state is always consistent.

use crate::model::homework::{HomeworkDraft, HomeworkItem, HomeworkValidationError};
use crate::model::subject::Subject;
use crate::service::homework_store::{HomeworkBySubject, HomeworkStore};
use chrono::NaiveDate;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Clonable handle to one session store.
#[derive(Debug, Clone, Default)]
pub struct SharedHomeworkStore {
    inner: Arc<Mutex<HomeworkStore>>,
}

impl SharedHomeworkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing store, e.g. one already seeded by an initial load.
    pub fn from_store(store: HomeworkStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn add(
        &self,
        subject: Subject,
        task: impl Into<String>,
        due_date: NaiveDate,
    ) -> Result<HomeworkItem, HomeworkValidationError> {
        self.lock().add(subject, task, due_date)
    }

    pub fn add_draft(
        &self,
        draft: &HomeworkDraft,
    ) -> Result<HomeworkItem, HomeworkValidationError> {
        self.lock().add_draft(draft)
    }

    pub fn seed<I>(&self, drafts: I) -> Result<Vec<HomeworkItem>, HomeworkValidationError>
    where
        I: IntoIterator<Item = HomeworkDraft>,
    {
        self.lock().seed(drafts)
    }

    pub fn delete(&self, id: &str) -> bool {
        self.lock().delete(id)
    }

    /// Grouped view computed from one consistent snapshot.
    pub fn list_by_subject(&self) -> HomeworkBySubject {
        self.lock().list_by_subject()
    }

    /// Snapshot of all items in insertion order.
    pub fn items(&self) -> Vec<HomeworkItem> {
        self.lock().items().to_vec()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HomeworkStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

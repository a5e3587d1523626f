//! Homework repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the ordered homework collection for one session.
//! - Keep collection mechanics out of the store's use-case logic.
//!
//! # Invariants
//! - Iteration order is insertion order (oldest first).
//! - Removal preserves the relative order of the remaining items.
//! - Callers allocate ids; `append` expects an id not already stored.

use crate::model::homework::{HomeworkId, HomeworkItem};

/// Ordered collection contract for homework items.
pub trait HomeworkRepository {
    /// Appends items at the end, preserving their order.
    fn append(&mut self, items: Vec<HomeworkItem>);
    /// Removes one item by id and returns it when present.
    fn remove(&mut self, id: HomeworkId) -> Option<HomeworkItem>;
    fn get(&self, id: HomeworkId) -> Option<&HomeworkItem>;
    fn contains(&self, id: HomeworkId) -> bool {
        self.get(id).is_some()
    }
    /// All items in insertion order.
    fn items(&self) -> &[HomeworkItem];
}

/// Vec-backed session repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHomeworkRepository {
    items: Vec<HomeworkItem>,
}

impl InMemoryHomeworkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HomeworkRepository for InMemoryHomeworkRepository {
    fn append(&mut self, items: Vec<HomeworkItem>) {
        debug_assert!(items.iter().all(|item| !self.contains(item.id())));
        self.items.extend(items);
    }

    fn remove(&mut self, id: HomeworkId) -> Option<HomeworkItem> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    fn get(&self, id: HomeworkId) -> Option<&HomeworkItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn items(&self) -> &[HomeworkItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::{HomeworkRepository, InMemoryHomeworkRepository};
    use crate::model::homework::HomeworkItem;
    use crate::model::subject::Subject;
    use chrono::NaiveDate;

    fn item(task: &str) -> HomeworkItem {
        let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        HomeworkItem::new(Subject::English, task, date).unwrap()
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut repo = InMemoryHomeworkRepository::new();
        let (a, b) = (item("a"), item("b"));
        repo.append(vec![a.clone()]);
        repo.append(vec![b.clone()]);
        assert_eq!(repo.items(), &[a, b]);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut repo = InMemoryHomeworkRepository::new();
        let (a, b, c) = (item("a"), item("b"), item("c"));
        repo.append(vec![a.clone(), b.clone(), c.clone()]);

        assert_eq!(repo.remove(b.id()), Some(b.clone()));
        assert_eq!(repo.items(), &[a, c]);
        assert_eq!(repo.remove(b.id()), None);
        assert!(!repo.contains(b.id()));
    }
}

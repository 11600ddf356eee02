//! In-memory store operations for the task collection.
//!
//! This module provides the `TaskStore` struct owning the ordered task
//! collection and the session view filter, along with display helpers for
//! the field enums. Everything here is session-only state; nothing is read
//! from or written to disk.

use crate::fields::{Filter, Status};
use crate::task::Task;

/// In-memory store owning the task collection and the view filter.
///
/// All mutation goes through `add_task`, `complete_task`, `delete_task`,
/// and `set_filter`; every operation is total and silently no-ops on
/// input it cannot act on. Ids come from a monotonic counter and are never
/// reused within a session, even after deletion.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    filter: Filter,
    next_id: u64,
}

impl TaskStore {
    /// Create an empty store with the default `All` filter.
    pub fn new() -> Self {
        TaskStore::default()
    }

    /// Add a task built from raw title and description input.
    ///
    /// Both inputs are trimmed. A title that is empty after trimming adds
    /// nothing and returns `None`; that is the whole failure mode, no error
    /// is surfaced. Otherwise the task starts `Pending` at the front of the
    /// collection (most recent first) and its fresh id is returned.
    pub fn add_task(&mut self, title: &str, description: &str) -> Option<u64> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        self.next_id += 1;
        let id = self.next_id;
        self.tasks.insert(
            0,
            Task {
                id,
                title: title.to_string(),
                description: description.trim().to_string(),
                status: Status::Pending,
            },
        );
        Some(id)
    }

    /// Mark a pending task as completed.
    ///
    /// Returns `true` when the task existed and was still pending. A missing
    /// id or an already-completed task is a no-op; the transition is
    /// one-directional and there is no path back to `Pending`.
    pub fn complete_task(&mut self, id: u64) -> bool {
        match self.get_mut(id) {
            Some(task) if task.status == Status::Pending => {
                task.status = Status::Completed;
                true
            }
            _ => false,
        }
    }

    /// Remove a task by ID, returning whether it was present. Idempotent.
    pub fn delete_task(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Replace the current view filter. The stored tasks are untouched.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// The current view filter.
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// The subsequence of tasks matching the current filter, in collection
    /// order. Pure projection, recomputed from (collection, filter) on
    /// every call.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| match self.filter {
                Filter::All => true,
                Filter::Completed => t.status == Status::Completed,
                Filter::Pending => t.status == Status::Pending,
            })
            .collect()
    }

    /// Get a task by ID.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: u64) -> Option<&mut Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        self.tasks.get_mut(idx)
    }

    /// Number of stored tasks regardless of filter.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when no tasks are stored, regardless of filter.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Convert a status to its display string.
pub fn format_status(s: Status) -> &'static str {
    match s {
        Status::Pending => "Pending",
        Status::Completed => "Completed",
    }
}

/// Convert a filter to its display string.
pub fn format_filter(f: Filter) -> &'static str {
    match f {
        Filter::All => "All",
        Filter::Completed => "Completed",
        Filter::Pending => "Pending",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(tasks: Vec<&Task>) -> Vec<String> {
        tasks.iter().map(|t| t.title.clone()).collect()
    }

    fn visible_ids(store: &TaskStore) -> Vec<u64> {
        store.visible_tasks().iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_add_blank_title_is_ignored() {
        let mut store = TaskStore::new();
        assert_eq!(store.add_task("", "x"), None);
        assert_eq!(store.add_task("   ", "x"), None);
        assert!(store.is_empty());
        assert!(store.visible_tasks().is_empty());
    }

    #[test]
    fn test_add_inserts_most_recent_first() {
        let mut store = TaskStore::new();
        store.add_task("A", "");
        store.add_task("B", "");
        assert_eq!(titles(store.visible_tasks()), vec!["B", "A"]);
    }

    #[test]
    fn test_add_trims_title_and_description() {
        let mut store = TaskStore::new();
        let id = store.add_task("  Report  ", "  due Friday  ").unwrap();
        let task = store.get(id).unwrap();
        assert_eq!(task.title, "Report");
        assert_eq!(task.description, "due Friday");
    }

    #[test]
    fn test_trim_preserves_internal_whitespace() {
        let mut store = TaskStore::new();
        let id = store.add_task("  weekly  report  ", "").unwrap();
        assert_eq!(store.get(id).unwrap().title, "weekly  report");
    }

    #[test]
    fn test_new_tasks_start_pending() {
        let mut store = TaskStore::new();
        let id = store.add_task("A", "desc").unwrap();
        assert_eq!(store.get(id).unwrap().status, Status::Pending);
    }

    #[test]
    fn test_complete_is_one_directional() {
        let mut store = TaskStore::new();
        let id = store.add_task("A", "").unwrap();
        assert!(store.complete_task(id));
        assert_eq!(store.get(id).unwrap().status, Status::Completed);
        assert!(!store.complete_task(id));
        assert_eq!(store.get(id).unwrap().status, Status::Completed);
    }

    #[test]
    fn test_complete_missing_id_is_noop() {
        let mut store = TaskStore::new();
        store.add_task("A", "");
        assert!(!store.complete_task(999));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_complete_does_not_reorder() {
        let mut store = TaskStore::new();
        store.add_task("A", "");
        let b = store.add_task("B", "").unwrap();
        store.add_task("C", "");
        store.complete_task(b);
        assert_eq!(titles(store.visible_tasks()), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = TaskStore::new();
        store.add_task("A", "");
        let b = store.add_task("B", "").unwrap();
        store.add_task("C", "");
        assert!(store.delete_task(b));
        assert_eq!(titles(store.visible_tasks()), vec!["C", "A"]);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut store = TaskStore::new();
        let id = store.add_task("A", "").unwrap();
        assert!(store.delete_task(id));
        assert!(!store.delete_task(id));
        assert!(!store.delete_task(999));
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_never_reused_within_a_session() {
        let mut store = TaskStore::new();
        let first = store.add_task("A", "").unwrap();
        store.delete_task(first);
        let second = store.add_task("B", "").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_default_filter_is_all() {
        let store = TaskStore::new();
        assert_eq!(store.filter(), Filter::All);
    }

    #[test]
    fn test_filter_affects_only_the_visible_list() {
        let mut store = TaskStore::new();
        store.add_task("A", "");
        store.add_task("B", "");
        store.set_filter(Filter::Completed);
        assert!(store.visible_tasks().is_empty());
        assert_eq!(store.len(), 2);
        store.set_filter(Filter::All);
        assert_eq!(store.visible_tasks().len(), 2);
    }

    #[test]
    fn test_filter_views_partition_the_collection() {
        let mut store = TaskStore::new();
        let a = store.add_task("A", "").unwrap();
        let b = store.add_task("B", "").unwrap();
        let c = store.add_task("C", "").unwrap();
        let d = store.add_task("D", "").unwrap();
        store.complete_task(b);
        store.complete_task(d);
        store.delete_task(c);

        store.set_filter(Filter::Pending);
        let pending = visible_ids(&store);
        store.set_filter(Filter::Completed);
        let completed = visible_ids(&store);
        store.set_filter(Filter::All);
        let all = visible_ids(&store);

        assert_eq!(pending, vec![a]);
        assert_eq!(completed, vec![d, b]);
        assert_eq!(all, vec![d, b, a]);
        for id in &pending {
            assert!(!completed.contains(id));
        }
        let mut union: Vec<u64> = pending.iter().chain(&completed).copied().collect();
        union.sort_unstable();
        let mut all_sorted = all;
        all_sorted.sort_unstable();
        assert_eq!(union, all_sorted);
    }

    #[test]
    fn test_round_trip_across_all_views() {
        let mut store = TaskStore::new();
        let id = store.add_task("Buy milk", "2%").unwrap();
        let visible_in = |store: &mut TaskStore, filter: Filter| {
            store.set_filter(filter);
            store.visible_tasks().iter().any(|t| t.id == id)
        };

        assert!(visible_in(&mut store, Filter::All));
        assert!(visible_in(&mut store, Filter::Pending));
        assert!(!visible_in(&mut store, Filter::Completed));

        store.complete_task(id);
        assert!(visible_in(&mut store, Filter::All));
        assert!(!visible_in(&mut store, Filter::Pending));
        assert!(visible_in(&mut store, Filter::Completed));

        store.delete_task(id);
        assert!(!visible_in(&mut store, Filter::All));
        assert!(!visible_in(&mut store, Filter::Pending));
        assert!(!visible_in(&mut store, Filter::Completed));
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_status(Status::Pending), "Pending");
        assert_eq!(format_status(Status::Completed), "Completed");
        assert_eq!(format_filter(Filter::All), "All");
        assert_eq!(format_filter(Filter::Completed), "Completed");
        assert_eq!(format_filter(Filter::Pending), "Pending");
    }
}

//! Task List
//!
//! Ordered, newest-first task collection with add/toggle/delete and derived views.
//! Persistence is handled by the store; everything here is pure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Task;

/// Display filter for the task list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Active, TaskFilter::Completed];

    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Active => "Active",
            TaskFilter::Completed => "Completed",
        }
    }

    /// Message shown when the filtered view is empty
    pub fn empty_message(self) -> String {
        match self {
            TaskFilter::All => "No tasks yet. Add one above!".to_string(),
            other => format!("No {} tasks found.", other.label().to_lowercase()),
        }
    }
}

/// Derived counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// Task collection, serialized as a plain JSON array
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Prepend a task; returns None (and changes nothing) for blank text
    pub fn add(&mut self, text: &str, now: DateTime<Utc>) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let task = Task {
            id: self.next_id(now.timestamp_millis()),
            text: text.to_string(),
            completed: false,
            created_at: now,
        };
        self.tasks.insert(0, task);
        self.tasks.first()
    }

    /// Flip `completed`; returns false if no task has this id
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the task; returns false if no task has this id
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    pub fn filtered(&self, filter: TaskFilter) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| filter.matches(task))
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> TaskStats {
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        TaskStats {
            total: self.tasks.len(),
            active: self.tasks.len() - completed,
            completed,
        }
    }

    /// Creation time in millis, bumped past the largest numeric id already present
    fn next_id(&self, now_millis: i64) -> String {
        let max_existing = self
            .tasks
            .iter()
            .filter_map(|task| task.id.parse::<i64>().ok())
            .max();
        let candidate = match max_existing {
            Some(max) if max >= now_millis => max.checked_add(1),
            _ => Some(now_millis),
        };
        match candidate {
            Some(id) => id.to_string(),
            None => self.suffixed_id(now_millis),
        }
    }

    /// `now_millis`, or `now_millis-N` with the smallest N not already taken
    fn suffixed_id(&self, now_millis: i64) -> String {
        let base = now_millis.to_string();
        if !self.contains_id(&base) {
            return base;
        }
        let mut suffix: u64 = 1;
        loop {
            let id = format!("{}-{}", base, suffix);
            if !self.contains_id(&id) {
                return id;
            }
            suffix += 1;
        }
    }

    fn contains_id(&self, id: &str) -> bool {
        self.tasks.iter().any(|task| task.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn list_with(texts: &[&str]) -> TaskList {
        let mut list = TaskList::default();
        for (i, text) in texts.iter().enumerate() {
            list.add(text, at(1_000 + i as i64));
        }
        list
    }

    #[test]
    fn test_add_to_empty_list() {
        let mut list = TaskList::default();
        let added = list.add("Buy milk", at(1_700_000_000_000)).cloned().unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(added.text, "Buy milk");
        assert!(!added.completed);
        assert_eq!(added.id, "1700000000000");
        assert_eq!(list.stats(), TaskStats { total: 1, active: 1, completed: 0 });
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut list = list_with(&["a"]);
        assert!(list.add("   \t\n", at(5_000)).is_none());
        assert!(list.add("", at(5_000)).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_trims_and_prepends() {
        let mut list = list_with(&["first", "second"]);
        list.add("  third  ", at(9_000));
        assert_eq!(list.tasks()[0].text, "third");
        assert_eq!(list.tasks()[1].text, "second");
        assert_eq!(list.tasks()[2].text, "first");
    }

    #[test]
    fn test_same_millisecond_ids_are_unique() {
        let mut list = TaskList::default();
        list.add("a", at(42));
        list.add("b", at(42));
        list.add("c", at(10));
        let ids: Vec<&str> = list.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["44", "43", "42"]);
    }

    #[test]
    fn test_add_after_largest_possible_id() {
        let raw = r#"[{"id":"9223372036854775807","text":"x","completed":false,"createdAt":"2024-05-01T10:00:00Z"}]"#;
        let mut list: TaskList = crate::storage::decode_or_default("tasks", Some(raw));
        assert_eq!(list.len(), 1);

        let first = list.add("next", at(1_700_000_000_000)).cloned().unwrap();
        assert_eq!(first.id, "1700000000000");

        let second = list.add("again", at(1_700_000_000_000)).cloned().unwrap();
        assert_eq!(second.id, "1700000000000-1");

        let third = list.add("once more", at(1_700_000_000_000)).cloned().unwrap();
        assert_eq!(third.id, "1700000000000-2");

        let mut ids: Vec<&str> = list.tasks().iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut list = list_with(&["a", "b"]);
        let id = list.tasks()[1].id.clone();

        assert!(list.toggle(&id));
        assert!(list.tasks()[1].completed);
        assert!(list.toggle(&id));
        assert!(!list.tasks()[1].completed);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut list = list_with(&["a"]);
        let before = list.clone();
        assert!(!list.toggle("nope"));
        assert_eq!(list, before);
    }

    #[test]
    fn test_delete() {
        let mut list = list_with(&["a", "b", "c"]);
        let id = list.tasks()[1].id.clone();

        assert!(list.delete(&id));
        assert_eq!(list.len(), 2);
        assert!(list.tasks().iter().all(|t| t.id != id));

        let before = list.clone();
        assert!(!list.delete(&id));
        assert_eq!(list, before);
    }

    #[test]
    fn test_filter_views_do_not_mutate() {
        let mut list = list_with(&["a", "b", "c"]);
        let id = list.tasks()[0].id.clone();
        list.toggle(&id);
        let before = list.clone();

        assert_eq!(list.filtered(TaskFilter::All).len(), 3);
        assert_eq!(list.filtered(TaskFilter::Active).len(), 2);
        let done = list.filtered(TaskFilter::Completed);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id, id);
        assert_eq!(list, before);
    }

    #[test]
    fn test_stats_add_up() {
        let mut list = list_with(&["a", "b", "c", "d"]);
        let ids: Vec<String> = list.tasks().iter().map(|t| t.id.clone()).collect();
        list.toggle(&ids[0]);
        list.toggle(&ids[2]);
        list.delete(&ids[3]);

        let stats = list.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.active + stats.completed, stats.total);
    }

    #[test]
    fn test_empty_messages() {
        assert_eq!(TaskFilter::All.empty_message(), "No tasks yet. Add one above!");
        assert_eq!(TaskFilter::Active.empty_message(), "No active tasks found.");
        assert_eq!(TaskFilter::Completed.empty_message(), "No completed tasks found.");
    }

    #[test]
    fn test_serializes_as_camel_case_array() {
        let list = list_with(&["Buy milk"]);
        let json = serde_json::to_value(&list).unwrap();
        let first = &json.as_array().unwrap()[0];
        assert_eq!(first["text"], "Buy milk");
        assert_eq!(first["completed"], false);
        assert!(first.get("createdAt").is_some());
    }
}

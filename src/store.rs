// File: src/store.rs
use crate::error::{OkukeError, Result};
use crate::model::Task;
use chrono::NaiveDate;

/// Ordered in-memory task collection.
///
/// Insertion order is both display and persistence order. Callers address tasks
/// 1-based; storage is 0-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn add(&mut self, task: Task) -> &Task {
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    fn position(&self, one_based: usize) -> Result<usize> {
        if one_based == 0 || one_based > self.tasks.len() {
            return Err(OkukeError::IndexOutOfRange {
                index: one_based,
                len: self.tasks.len(),
            });
        }
        Ok(one_based - 1)
    }

    pub fn get(&self, one_based: usize) -> Result<&Task> {
        let idx = self.position(one_based)?;
        Ok(&self.tasks[idx])
    }

    pub fn mark(&mut self, one_based: usize) -> Result<&Task> {
        let idx = self.position(one_based)?;
        self.tasks[idx].mark();
        Ok(&self.tasks[idx])
    }

    pub fn unmark(&mut self, one_based: usize) -> Result<&Task> {
        let idx = self.position(one_based)?;
        self.tasks[idx].unmark();
        Ok(&self.tasks[idx])
    }

    pub fn remove(&mut self, one_based: usize) -> Result<Task> {
        let idx = self.position(one_based)?;
        Ok(self.tasks.remove(idx))
    }

    /// Case-insensitive substring search on descriptions, in list order.
    pub fn find(&self, keyword: &str) -> Vec<&Task> {
        let needle = keyword.to_lowercase();
        self.tasks
            .iter()
            .filter(|t| t.matches_keyword(&needle))
            .collect()
    }

    pub fn occurring_on(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.occurs_on(date)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskList {
        TaskList::from_tasks(vec![
            Task::todo("Read Book"),
            Task::todo("Return Book"),
            Task::todo("Buy Milk"),
        ])
    }

    #[test]
    fn test_add_returns_appended_task() {
        let mut list = TaskList::new();
        assert!(list.is_empty());
        let added = list.add(Task::todo("first"));
        assert_eq!(added.description(), "first");
        list.add(Task::todo("second"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(2).unwrap().description(), "second");
    }

    #[test]
    fn test_out_of_range_leaves_list_untouched() {
        let mut list = sample();
        let before = list.clone();

        for bad in [0, 4, 100] {
            assert!(matches!(
                list.mark(bad),
                Err(OkukeError::IndexOutOfRange { index, len: 3 }) if index == bad
            ));
            assert!(list.unmark(bad).is_err());
            assert!(list.remove(bad).is_err());
        }
        assert_eq!(list, before);
    }

    #[test]
    fn test_remove_shifts_following_tasks() {
        let mut list = sample();
        let removed = list.remove(1).unwrap();
        assert_eq!(removed.description(), "Read Book");
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).unwrap().description(), "Return Book");
    }

    #[test]
    fn test_find_is_case_insensitive_and_ordered() {
        let list = sample();
        let found: Vec<&str> = list.find("book").iter().map(|t| t.description()).collect();
        assert_eq!(found, vec!["Read Book", "Return Book"]);
        assert!(list.find("pizza").is_empty());
        assert_eq!(list.find("MILK").len(), 1);
    }
}

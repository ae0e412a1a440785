use tracing::info;

use crate::error::CommandError;
use crate::task::Task;

/// Hard cap on how many tasks the list will hold.
pub const MAX_TASKS: usize = 100;

/// Tasks in insertion order. Indices are 0-based here and 1-based on screen;
/// deleting a task shifts everything after it down by one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TodoList {
    pub items: Vec<Task>,
}

impl TodoList {
    pub fn add(&mut self, task: Task) -> Result<(), CommandError> {
        if self.is_full() {
            return Err(CommandError::TaskArrayFull);
        }
        info!(kind = %task.kind().tag(), total = self.items.len() + 1, "task added");
        self.items.push(task);
        Ok(())
    }

    pub fn get(&self, idx: usize) -> Option<&Task> {
        self.items.get(idx)
    }

    pub fn delete_index(&mut self, idx: usize) -> Option<Task> {
        if idx < self.items.len() {
            info!(index = idx, "task removed");
            Some(self.items.remove(idx))
        } else {
            None
        }
    }

    /// Returns the task that was marked, or `None` when the index is out of range.
    pub fn mark_done_index(&mut self, idx: usize) -> Option<&Task> {
        let t = self.items.get_mut(idx)?;
        t.mark_complete();
        Some(t)
    }

    /// Tasks paired with their 1-based display index.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Task)> {
        self.items.iter().enumerate().map(|(i, t)| (i + 1, t))
    }

    /// How many tasks are currently held.
    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_TASKS
    }
}

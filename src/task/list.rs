//! Ordered, capacity-bounded task collection

use tracing::warn;

use crate::config::ListConfig;
use crate::error::{Result, TrackerError};

use super::model::Task;

/// How many tasks the tracker holds unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 100;

/// An ordered task collection with a fixed capacity and a full latch.
///
/// The latch trips the moment the list reaches capacity and, by default,
/// stays tripped even if tasks are deleted afterwards. The
/// `release_full_on_delete` knob opts into the symmetric behavior.
///
/// Indices on `mark_done` and `delete` are the user-facing 1-based ones.
#[derive(Debug, Clone)]
pub struct TaskList {
    tasks: Vec<Task>,
    capacity: usize,
    full: bool,
    release_full_on_delete: bool,
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl TaskList {
    pub fn new(capacity: usize) -> Self {
        Self {
            tasks: Vec::new(),
            capacity,
            full: false,
            release_full_on_delete: false,
        }
    }

    pub fn with_config(config: &ListConfig) -> Self {
        Self {
            tasks: Vec::new(),
            capacity: config.capacity,
            full: false,
            release_full_on_delete: config.release_full_on_delete,
        }
    }

    /// Rebuild a list from previously saved tasks.
    ///
    /// Anything beyond capacity is dropped, and a list loaded at capacity
    /// starts latched.
    pub fn from_tasks(tasks: Vec<Task>, config: &ListConfig) -> Self {
        let mut list = Self::with_config(config);

        if tasks.len() > list.capacity {
            warn!(
                loaded = tasks.len(),
                capacity = list.capacity,
                "saved tasks exceed capacity, dropping the excess"
            );
        }

        list.tasks = tasks.into_iter().take(list.capacity).collect();
        list.full = list.tasks.len() == list.capacity;
        list
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the full latch has tripped.
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Whether a delete releases the full latch (config knob; off by
    /// default, which keeps the latch one-way).
    pub fn releases_full_on_delete(&self) -> bool {
        self.release_full_on_delete
    }

    /// The tasks in display order, for rendering or persistence.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Append a task, latching the list when it reaches capacity.
    pub fn add(&mut self, task: Task) -> Result<()> {
        if self.tasks.len() == self.capacity {
            return Err(TrackerError::Overflow {
                capacity: self.capacity,
            });
        }

        self.tasks.push(task);
        if self.tasks.len() == self.capacity {
            self.full = true;
        }
        Ok(())
    }

    /// Mark the task at a 1-based index done and return it for rendering.
    /// Marking an already-done task again succeeds silently.
    pub fn mark_done(&mut self, index: i64) -> Result<&Task> {
        if self.tasks.is_empty() {
            return Err(TrackerError::EmptyList);
        }

        let slot = self.position(index)?;
        self.tasks[slot].mark_done();
        Ok(&self.tasks[slot])
    }

    /// Remove and return the task at a 1-based index. Later tasks shift down
    /// by one. The full latch stays tripped unless configured otherwise.
    pub fn delete(&mut self, index: i64) -> Result<Task> {
        let slot = self.position(index)?;
        let task = self.tasks.remove(slot);

        if self.release_full_on_delete {
            self.full = false;
        }

        Ok(task)
    }

    /// The ordered (1-based index, task) pairs for rendering.
    pub fn list_all(&self) -> Result<Vec<(usize, &Task)>> {
        if self.tasks.is_empty() {
            return Err(TrackerError::EmptyList);
        }

        Ok(self
            .tasks
            .iter()
            .enumerate()
            .map(|(slot, task)| (slot + 1, task))
            .collect())
    }

    fn position(&self, index: i64) -> Result<usize> {
        let size = self.tasks.len();
        if index < 1 || index as usize > size {
            return Err(TrackerError::IndexOutOfRange { index, size });
        }
        Ok((index - 1) as usize)
    }
}

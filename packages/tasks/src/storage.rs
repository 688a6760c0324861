// ABOUTME: Thread-safe in-memory storage for tasks
// ABOUTME: Single-lock CRUD plus linear-scan filters by tag and due date

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Datelike;
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::{Task, TaskCreateInput, TaskId};

/// Storage errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Task not found: {0}")]
    NotFound(TaskId),
}

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Default)]
struct TaskTable {
    tasks: HashMap<TaskId, Task>,
    next_id: TaskId,
}

/// In-memory task store.
///
/// Every operation takes the same exclusive lock for its whole duration,
/// reads included. Operations never call each other while the lock is held.
/// Ids start at 0 and are never reused, not even after [`delete_all`].
///
/// [`delete_all`]: TaskStorage::delete_all
#[derive(Debug, Default)]
pub struct TaskStorage {
    table: Mutex<TaskTable>,
}

impl TaskStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, TaskTable> {
        // Each mutation is a single insert/remove/counter step, so a panic in
        // another holder cannot leave the table half-updated.
        self.table.lock().unwrap_or_else(|poisoned| {
            warn!("Recovering task table from poisoned lock");
            poisoned.into_inner()
        })
    }

    /// Store a new task and return its id. Always succeeds.
    pub fn create_task(&self, input: TaskCreateInput) -> TaskId {
        let mut table = self.lock();

        let id = table.next_id;
        let task = Task {
            id,
            description: input.description,
            tags: input.tags,
            due: input.due,
        };
        table.tasks.insert(id, task);
        table.next_id += 1;

        debug!(task_id = id, "Created task");
        id
    }

    /// Return an owned copy of the task.
    pub fn get_task(&self, id: TaskId) -> StorageResult<Task> {
        self.lock()
            .tasks
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound(id))
    }

    pub fn delete_task(&self, id: TaskId) -> StorageResult<()> {
        let mut table = self.lock();

        match table.tasks.remove(&id) {
            Some(_) => {
                debug!(task_id = id, "Deleted task");
                Ok(())
            }
            None => Err(StorageError::NotFound(id)),
        }
    }

    /// Remove every task. The id counter keeps going.
    pub fn delete_all_tasks(&self) {
        let mut table = self.lock();
        let removed = table.tasks.len();
        table.tasks.clear();

        debug!(removed, next_id = table.next_id, "Deleted all tasks");
    }

    /// Every stored task, in no particular order.
    pub fn list_tasks(&self) -> Vec<Task> {
        self.lock().tasks.values().cloned().collect()
    }

    /// Tasks carrying a tag exactly equal to `tag` (case-sensitive).
    pub fn list_tasks_by_tag(&self, tag: &str) -> Vec<Task> {
        self.lock()
            .tasks
            .values()
            .filter(|task| task.has_tag(tag))
            .cloned()
            .collect()
    }

    /// Tasks due on the given calendar day, compared in each task's own
    /// offset. An impossible date (e.g. February 30) matches nothing.
    pub fn list_tasks_by_due_date(&self, year: i32, month: u32, day: u32) -> Vec<Task> {
        self.lock()
            .tasks
            .values()
            .filter(|task| {
                let due = task.due.date_naive();
                due.year() == year && due.month() == month && due.day() == day
            })
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().tasks.is_empty()
    }
}

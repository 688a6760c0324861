// ABOUTME: In-memory task store for the to-do service
// ABOUTME: Provides task types and a thread-safe storage layer with tag and due-date queries

pub mod storage;
pub mod types;

// Re-export main types
pub use storage::{StorageError, StorageResult, TaskStorage};
pub use types::{unset_due, Task, TaskCreateInput, TaskId};

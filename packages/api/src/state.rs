use std::sync::Arc;

use todo_tasks::TaskStorage;

/// Shared state handed to every handler.
#[derive(Clone, Default)]
pub struct AppState {
    pub task_storage: Arc<TaskStorage>,
}

impl AppState {
    pub fn new(task_storage: Arc<TaskStorage>) -> Self {
        Self { task_storage }
    }
}

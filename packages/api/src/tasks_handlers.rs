// ABOUTME: HTTP request handlers for to-do operations
// ABOUTME: Maps each route onto a single TaskStorage call

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use todo_tasks::{Task, TaskCreateInput, TaskId};
use tracing::info;

use crate::error::{ApiResult, AppError};
use crate::extract::{ValidJson, ValidPath};
use crate::state::AppState;

/// Response body for a created task
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTaskResponse {
    pub id: TaskId,
}

/// Create a new task
pub async fn create_task(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<TaskCreateInput>,
) -> Json<CreateTaskResponse> {
    info!(
        "Creating task '{}' with {} tag(s)",
        input.description,
        input.tags.len()
    );

    let id = state.task_storage.create_task(input);
    Json(CreateTaskResponse { id })
}

/// List all tasks
pub async fn list_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    info!("Listing all tasks");

    Json(state.task_storage.list_tasks())
}

/// Ids in the path are parsed as signed integers. A value no task can carry
/// (negative) is simply not found.
fn existing_id(raw: i64) -> ApiResult<TaskId> {
    TaskId::try_from(raw).map_err(|_| AppError::not_found())
}

/// Get a single task by ID
pub async fn get_task(
    State(state): State<AppState>,
    ValidPath(task_id): ValidPath<i64>,
) -> ApiResult<Json<Task>> {
    info!("Getting task: {}", task_id);

    let task = state.task_storage.get_task(existing_id(task_id)?)?;
    Ok(Json(task))
}

/// Delete a task
pub async fn delete_task(
    State(state): State<AppState>,
    ValidPath(task_id): ValidPath<i64>,
) -> ApiResult<StatusCode> {
    info!("Deleting task: {}", task_id);

    state.task_storage.delete_task(existing_id(task_id)?)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete every task. Ids handed out afterwards continue from the old counter.
pub async fn delete_all_tasks(State(state): State<AppState>) -> StatusCode {
    info!("Deleting all tasks");

    state.task_storage.delete_all_tasks();
    StatusCode::NO_CONTENT
}

/// List tasks carrying an exact tag
pub async fn list_tasks_by_tag(
    State(state): State<AppState>,
    ValidPath(tag): ValidPath<String>,
) -> Json<Vec<Task>> {
    info!("Listing tasks by tag: {}", tag);

    Json(state.task_storage.list_tasks_by_tag(&tag))
}

/// Path parameters for due-date lookups
#[derive(Debug, Deserialize)]
pub struct DueDateParams {
    pub year: i32,
    pub month: u32,
    pub day: i64,
}

/// List tasks due on a calendar day
pub async fn list_tasks_by_due_date(
    State(state): State<AppState>,
    ValidPath(params): ValidPath<DueDateParams>,
) -> ApiResult<Json<Vec<Task>>> {
    info!(
        "Listing tasks due on {}-{:02}-{:02}",
        params.year, params.month, params.day
    );

    if !(1..=12).contains(&params.month) {
        return Err(AppError::validation(format!(
            "month must be between 1 and 12, got {}",
            params.month
        )));
    }

    // A day outside the calendar's range matches nothing
    let Ok(day) = u32::try_from(params.day) else {
        return Ok(Json(Vec::new()));
    };

    Ok(Json(state.task_storage.list_tasks_by_due_date(
        params.year,
        params.month,
        day,
    )))
}

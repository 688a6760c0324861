// ABOUTME: HTTP API layer for the to-do server providing REST endpoints and routing
// ABOUTME: Thin mapping of routes onto the in-memory task store

use axum::{
    routing::{delete, get, post},
    Router,
};

pub mod error;
pub mod extract;
pub mod state;
pub mod tasks_handlers;

pub use error::{ApiResult, AppError};
pub use state::AppState;

/// Creates the to-do API router
pub fn create_todos_router() -> Router<AppState> {
    Router::new()
        .route("/todo", post(tasks_handlers::create_task))
        .route("/todo/", post(tasks_handlers::create_task))
        .route(
            "/todos",
            get(tasks_handlers::list_tasks).post(tasks_handlers::create_task),
        )
        .route(
            "/todos/",
            get(tasks_handlers::list_tasks).post(tasks_handlers::create_task),
        )
        .route(
            "/todo/{task_id}",
            get(tasks_handlers::get_task).delete(tasks_handlers::delete_task),
        )
        .route("/deleteAllTodos", delete(tasks_handlers::delete_all_tasks))
        .route("/tag/{tag}", get(tasks_handlers::list_tasks_by_tag))
        .route(
            "/due/{year}/{month}/{day}",
            get(tasks_handlers::list_tasks_by_due_date),
        )
}

/// Fallback for unknown routes so they answer with the API error shape
pub async fn not_found() -> AppError {
    AppError::not_found()
}

use axum::{routing::get, Router};
use todo_api::AppState;

pub mod health;

/// Full application router: to-do routes plus service endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/robot.txt", get(health::robots_txt))
        .merge(todo_api::create_todos_router())
        .fallback(todo_api::not_found)
        .with_state(state)
}

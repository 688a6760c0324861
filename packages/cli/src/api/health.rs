use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};
use todo_api::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().timestamp(),
        "version": env!("CARGO_PKG_VERSION"),
        "service": "todo-server",
        "tasks": state.task_storage.len()
    }))
}

/// Plain-text greeting kept at the path the service has always answered on
pub async fn robots_txt() -> &'static str {
    "Heelo"
}

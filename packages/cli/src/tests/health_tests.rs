use crate::api::health::{health_check, robots_txt};
use axum::extract::State;
use std::sync::Arc;
use todo_api::AppState;
use todo_tasks::{TaskCreateInput, TaskStorage};

#[tokio::test]
async fn test_health_check_fields() {
    let value = health_check(State(AppState::default())).await.0;

    assert_eq!(
        value.get("status").and_then(|v| v.as_str()),
        Some("healthy")
    );
    assert_eq!(
        value.get("service").and_then(|v| v.as_str()),
        Some("todo-server")
    );
    assert!(value.get("version").is_some());
    assert_eq!(value.get("tasks").and_then(|v| v.as_u64()), Some(0));
}

#[tokio::test]
async fn test_health_check_timestamp() {
    let value = health_check(State(AppState::default())).await.0;

    let timestamp = value.get("timestamp").and_then(|v| v.as_i64());
    // Timestamp should be reasonable (after year 2020)
    assert!(timestamp.unwrap() > 1577836800); // Jan 1, 2020
}

#[tokio::test]
async fn test_health_check_counts_tasks() {
    let storage = Arc::new(TaskStorage::new());
    let due = chrono::DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap();
    storage.create_task(TaskCreateInput::new("a", due));
    storage.create_task(TaskCreateInput::new("b", due));

    let value = health_check(State(AppState::new(storage))).await.0;
    assert_eq!(value.get("tasks").and_then(|v| v.as_u64()), Some(2));
}

#[tokio::test]
async fn test_robots_txt() {
    assert_eq!(robots_txt().await, "Heelo");
}

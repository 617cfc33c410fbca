use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use sqlx::{query, query_as};

use crate::{model::Task, schema::TaskSchema, server::AppState};

type HandlerError = (StatusCode, Json<serde_json::Value>);

// Handler for the health checker route
pub async fn health_checker_handler() -> impl IntoResponse {
    const MESSAGE: &str = "Task list API with Rust, SQLX, SQLite, and Axum";

    let json_response = serde_json::json!({
        "status": "success",
        "message": MESSAGE
    });

    Json(json_response)
}

fn internal_error(err: sqlx::Error) -> HandlerError {
    tracing::error!(error = %err, "database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"status": "error","message": format!("{:?}", err)})),
    )
}

fn not_found(id: i64) -> HandlerError {
    let error_response = serde_json::json!({
        "status": "fail",
        "message": format!("Task with ID: {} not found", id)
    });
    (StatusCode::NOT_FOUND, Json(error_response))
}

fn validate(body: &TaskSchema) -> Result<(), HandlerError> {
    if body.description.trim().is_empty() {
        let error_response = serde_json::json!({
            "status": "fail",
            "message": "Task description must not be empty",
        });
        return Err((StatusCode::BAD_REQUEST, Json(error_response)));
    }
    Ok(())
}

// Handler for listing all tasks; the body is a bare array
pub async fn get_tasks(
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HandlerError> {
    let tasks =
        query_as::<_, Task>("SELECT id, description, completed FROM tarefa ORDER BY id")
            .fetch_all(&data.db)
            .await
            .map_err(internal_error)?;

    Ok((StatusCode::OK, Json(tasks)))
}

// Handler for creating a new task
pub async fn create_task(
    State(data): State<Arc<AppState>>,
    Json(body): Json<TaskSchema>,
) -> Result<impl IntoResponse, HandlerError> {
    validate(&body)?;

    let task = query_as::<_, Task>(
        "INSERT INTO tarefa (description, completed) VALUES (?, ?) RETURNING id, description, completed",
    )
    .bind(body.description)
    .bind(body.completed)
    .fetch_one(&data.db)
    .await
    .map_err(internal_error)?;

    tracing::info!(id = task.id, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

// Handler for getting a specific task by ID
pub async fn get_task(
    Path(id): Path<i64>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HandlerError> {
    let task = query_as::<_, Task>("SELECT id, description, completed FROM tarefa WHERE id = ?")
        .bind(id)
        .fetch_optional(&data.db)
        .await
        .map_err(internal_error)?;

    match task {
        Some(task) => Ok((StatusCode::OK, Json(task))),
        None => Err(not_found(id)),
    }
}

// Handler for replacing a task's description and completion flag
pub async fn update_task(
    Path(id): Path<i64>,
    State(data): State<Arc<AppState>>,
    Json(body): Json<TaskSchema>,
) -> Result<impl IntoResponse, HandlerError> {
    validate(&body)?;

    let task = query_as::<_, Task>(
        "UPDATE tarefa SET description = ?, completed = ? WHERE id = ? RETURNING id, description, completed",
    )
    .bind(body.description)
    .bind(body.completed)
    .bind(id)
    .fetch_optional(&data.db)
    .await
    .map_err(internal_error)?;

    match task {
        Some(task) => {
            tracing::info!(id, completed = task.completed, "task updated");
            Ok(Json(task))
        }
        None => Err(not_found(id)),
    }
}

// Handler for deleting a task by ID
pub async fn delete_task(
    Path(id): Path<i64>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HandlerError> {
    let rows_affected = query("DELETE FROM tarefa WHERE id = ?")
        .bind(id)
        .execute(&data.db)
        .await
        .map_err(internal_error)?
        .rows_affected();
    if rows_affected == 0 {
        return Err(not_found(id));
    }

    tracing::info!(id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}

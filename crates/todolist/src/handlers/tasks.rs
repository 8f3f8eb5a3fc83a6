//! Task CRUD handlers.
//!
//! Bodies are validated here, before the service is called, so a rejected
//! request never reaches the cache or the store.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use todolist_core::task::{Task, TaskPayload};

use crate::{
    handlers::{
        response::{ResponseStandard, StatusResponse},
        AppError,
    },
    state::AppState,
};

/// Validates a JSON body, turning a malformed body into a 422.
fn validated(body: Result<Json<TaskPayload>, JsonRejection>) -> Result<Task, AppError> {
    let Json(payload) = body?;
    Ok(payload.validate()?)
}

/// Parses the `{id}` path segment.
fn task_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| {
        tracing::debug!(id = %raw, "Malformed task id");
        AppError::TaskNotFound
    })
}

/// List all tasks (GET /api/tasks).
pub async fn list_tasks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tasks = state.tasks.list_tasks().await?;
    Ok(Json(ResponseStandard::new("Success", tasks)))
}

/// Create a task (POST /api/task).
pub async fn create_task(
    State(state): State<AppState>,
    body: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let task = validated(body)?;
    let created = state.tasks.create_task(task).await?;

    tracing::info!(task_id = created.id, "Task created");
    Ok((
        StatusCode::CREATED,
        Json(ResponseStandard::new("Task Created", created)),
    ))
}

/// Update a task (PUT /api/task/{id}).
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // Body first, then id
    let task = validated(body)?;
    let id = task_id(&id)?;

    let updated = state.tasks.update_task(task.with_id(id)).await?;

    tracing::info!(task_id = id, "Task updated");
    Ok(Json(ResponseStandard::new("Task Updated", updated)))
}

/// Delete a task (DELETE /api/task/{id}).
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = task_id(&id)?;
    state.tasks.delete_task(id).await?;

    tracing::info!(task_id = id, "Task deleted");
    Ok(Json(ResponseStandard::new(
        "Task Deleted",
        StatusResponse { status: true },
    )))
}

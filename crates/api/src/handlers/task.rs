//! Handlers for the `/tasks` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::schedule;
use taskboard_core::types::DbId;
use taskboard_db::models::task::{NewTask, Task, TaskInput};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::DELETED;
use crate::state::AppState;

/// POST /tasks
///
/// `createdAt` is stamped here. Without `completedAt` the task is due one
/// month later; a supplied `completedAt` before `createdAt` is rejected.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<TaskInput>,
) -> AppResult<(StatusCode, Json<Task>)> {
    input.validate()?;
    let new_task = NewTask::from_input(input, schedule::now())?;
    let task = state.gateway.create_task(&new_task).await?;
    tracing::info!(
        task_id = task.id,
        project_id = task.project_id,
        assignee_id = task.assignee_id,
        "Task created"
    );
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    let tasks = state.gateway.list_tasks().await?;
    Ok(Json(tasks))
}

/// GET /tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Task>> {
    let task = state
        .gateway
        .find_task(id)
        .await?
        .ok_or(AppError::not_found("Task", id))?;
    Ok(Json(task))
}

/// PUT /tasks/{id}
///
/// Replaces every mutable field; the date-ordering rule is not re-checked.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<TaskInput>,
) -> AppResult<Json<Task>> {
    input.validate()?;
    let task = state
        .gateway
        .update_task(id, &input)
        .await?
        .ok_or(AppError::not_found("Task", id))?;
    Ok(Json(task))
}

/// DELETE /tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<&'static str>> {
    if !state.gateway.delete_task(id).await? {
        return Err(AppError::not_found("Task", id));
    }
    tracing::info!(task_id = id, "Task deleted");
    Ok(Json(DELETED))
}

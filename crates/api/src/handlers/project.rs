//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::schedule;
use taskboard_core::types::DbId;
use taskboard_db::models::project::{NewProject, Project, ProjectInput};
use taskboard_db::models::task::Task;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::DELETED;
use crate::state::AppState;

/// POST /projects
///
/// `startDate` is stamped here; `endDate` defaults to one year later.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<ProjectInput>,
) -> AppResult<(StatusCode, Json<Project>)> {
    input.validate()?;
    let new_project = NewProject::from_input(input, schedule::now())?;
    let project = state.gateway.create_project(&new_project).await?;
    tracing::info!(project_id = project.id, manager_id = project.manager_id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.gateway.list_projects().await?;
    Ok(Json(projects))
}

/// GET /projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Project>> {
    let project = state
        .gateway
        .find_project(id)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    Ok(Json(project))
}

/// PUT /projects/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ProjectInput>,
) -> AppResult<Json<Project>> {
    input.validate()?;
    let project = state
        .gateway
        .update_project(id, &input)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    Ok(Json(project))
}

/// DELETE /projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<&'static str>> {
    if !state.gateway.delete_project(id).await? {
        return Err(AppError::not_found("Project", id));
    }
    tracing::info!(project_id = id, "Project deleted");
    Ok(Json(DELETED))
}

/// GET /projects/{id}/tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Vec<Task>>> {
    state
        .gateway
        .find_project(id)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    let tasks = state.gateway.tasks_by_project(id).await?;
    Ok(Json(tasks))
}

//! Handlers for the `/search` endpoints.
//!
//! Users match name and email exactly. Tasks and projects match text
//! fields as case-insensitive substrings and ids exactly. Empty, zero, or
//! non-numeric parameters are ignored, so no parameters at all returns
//! every row.

use axum::extract::State;
use axum::Json;
use taskboard_db::models::project::{Project, ProjectFilter};
use taskboard_db::models::task::{Task, TaskFilter};
use taskboard_db::models::user::{User, UserFilter};

use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::query::{ProjectSearchParams, TaskSearchParams, UserSearchParams};
use crate::state::AppState;

/// GET /search/users
pub async fn users(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<UserSearchParams>,
) -> AppResult<Json<Vec<User>>> {
    let filter = UserFilter::from(params);
    let users = state.gateway.search_users(&filter).await?;
    tracing::debug!(?filter, count = users.len(), "User search");
    Ok(Json(users))
}

/// GET /search/tasks
pub async fn tasks(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<TaskSearchParams>,
) -> AppResult<Json<Vec<Task>>> {
    let filter = TaskFilter::from(params);
    let tasks = state.gateway.search_tasks(&filter).await?;
    tracing::debug!(?filter, count = tasks.len(), "Task search");
    Ok(Json(tasks))
}

/// GET /search/projects
pub async fn projects(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ProjectSearchParams>,
) -> AppResult<Json<Vec<Project>>> {
    let filter = ProjectFilter::from(params);
    let projects = state.gateway.search_projects(&filter).await?;
    tracing::debug!(?filter, count = projects.len(), "Project search");
    Ok(Json(projects))
}

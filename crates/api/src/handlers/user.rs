//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::schedule;
use taskboard_core::types::DbId;
use taskboard_db::models::task::Task;
use taskboard_db::models::user::{NewUser, User, UserInput};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::DELETED;
use crate::state::AppState;

/// POST /users
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<UserInput>,
) -> AppResult<(StatusCode, Json<User>)> {
    input.validate()?;
    let user = state
        .gateway
        .create_user(&NewUser::from_input(input, schedule::now()))
        .await?;
    tracing::info!(user_id = user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.gateway.list_users().await?;
    Ok(Json(users))
}

/// GET /users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<User>> {
    let user = state
        .gateway
        .find_user(id)
        .await?
        .ok_or(AppError::not_found("User", id))?;
    Ok(Json(user))
}

/// PUT /users/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UserInput>,
) -> AppResult<Json<User>> {
    input.validate()?;
    let user = state
        .gateway
        .update_user(id, &input)
        .await?
        .ok_or(AppError::not_found("User", id))?;
    Ok(Json(user))
}

/// DELETE /users/{id}
///
/// Tasks assigned to the user are left in place.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<&'static str>> {
    if !state.gateway.delete_user(id).await? {
        return Err(AppError::not_found("User", id));
    }
    tracing::info!(user_id = id, "User deleted");
    Ok(Json(DELETED))
}

/// GET /users/{id}/tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Vec<Task>>> {
    state
        .gateway
        .find_user(id)
        .await?
        .ok_or(AppError::not_found("User", id))?;
    let tasks = state.gateway.tasks_by_assignee(id).await?;
    Ok(Json(tasks))
}

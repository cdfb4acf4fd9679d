pub mod health;
pub mod project;
pub mod search;
pub mod task;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                      list, create
/// /users/{id}                 get, update, delete
/// /users/{id}/tasks           tasks assigned to the user
///
/// /tasks                      list, create
/// /tasks/{id}                 get, update, delete
///
/// /projects                   list, create
/// /projects/{id}              get, update, delete
/// /projects/{id}/tasks        tasks belonging to the project
///
/// /search/users               ?name=&email=
/// /search/tasks               ?title=&priority=&status=&assignee=&project=
/// /search/projects            ?title=&manager=
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user::router())
        .nest("/tasks", task::router())
        .nest("/projects", project::router())
        .nest("/search", search::router())
}

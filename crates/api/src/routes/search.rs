use axum::routing::get;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

/// Routes mounted at `/search`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(search::users))
        .route("/tasks", get(search::tasks))
        .route("/projects", get(search::projects))
}

use axum::{routing::get, Router};

use crate::state::AppState;

/// GET /health -- liveness only; does not touch the database.
async fn health_check() -> &'static str {
    "OK"
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

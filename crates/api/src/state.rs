use std::sync::Arc;

use taskboard_db::Gateway;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the gateway is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway, built once at startup.
    pub gateway: Arc<dyn Gateway>,
}

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the evaluator itself is stateless, so only the
/// configuration is shared.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

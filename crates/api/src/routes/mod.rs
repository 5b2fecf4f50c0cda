pub mod health;
pub mod water_quality;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /water-quality/thresholds                        threshold table (GET)
/// /water-quality/classify?sensor=&value=           single reading (GET)
/// /water-quality/evaluate                          full reading set (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/water-quality", water_quality::router())
}

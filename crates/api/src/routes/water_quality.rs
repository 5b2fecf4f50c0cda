//! Route definitions for water quality endpoints.
//!
//! Mounted at `/water-quality` within the `/api/v1` tree.
//!
//! ```text
//! GET    /thresholds    -> list_thresholds
//! GET    /classify      -> classify
//! POST   /evaluate      -> evaluate
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::water_quality;
use crate::state::AppState;

/// Build the `/water-quality` router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/thresholds", get(water_quality::list_thresholds))
        .route("/classify", get(water_quality::classify))
        .route("/evaluate", post(water_quality::evaluate))
}

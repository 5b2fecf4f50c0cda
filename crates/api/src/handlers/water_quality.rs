//! Handlers for water quality evaluation.
//!
//! Thin wrappers over `rainwater_core::water_quality`: inputs are checked
//! for finiteness here, everything else is the core's job.

use std::collections::BTreeMap;

use axum::extract::Query;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use rainwater_core::sensor::{SensorKind, SensorReading};
use rainwater_core::threshold::THRESHOLDS;
use rainwater_core::threshold_validation::validate_finite_reading;
use rainwater_core::types::Timestamp;
use rainwater_core::water_quality::{
    self, SensorAssessment, StatusSummary, WaterQualityResult,
};
use rainwater_core::water_status::WaterStatus;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

/// Upper limit on readings per evaluate request.
pub const MAX_READINGS_PER_REQUEST: usize = 64;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for classifying a single reading.
#[derive(Debug, Deserialize)]
pub struct ClassifyParams {
    pub sensor: String,
    pub value: f64,
}

/// Classification of a single reading.
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub sensor: String,
    pub value: f64,
    pub status: WaterStatus,
    pub badge_color: &'static str,
    /// `None` for unknown sensors.
    pub position: Option<f64>,
}

/// Body for the evaluate endpoint: sensor name to reading.
#[derive(Debug, Deserialize)]
pub struct EvaluateBody {
    pub readings: BTreeMap<String, f64>,
}

/// Full evaluation of a reading set.
#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    #[serde(flatten)]
    pub result: WaterQualityResult,
    pub headline: &'static str,
    pub summary: StatusSummary,
    pub assessments: Vec<SensorAssessment>,
    /// Sensor names that were not recognised and took no part in evaluation.
    pub ignored: Vec<String>,
    pub evaluated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /water-quality/thresholds
///
/// List the fixed threshold definitions for every sensor.
pub async fn list_thresholds() -> impl IntoResponse {
    Json(DataResponse { data: THRESHOLDS })
}

/// GET /water-quality/classify?sensor=&value=
///
/// Classify one reading. Unknown sensors classify as `warning`.
pub async fn classify(Query(params): Query<ClassifyParams>) -> AppResult<impl IntoResponse> {
    validate_finite_reading(params.value, "value")?;

    let status = water_quality::classify_named(&params.sensor, params.value);
    let position = water_quality::normalized_position_named(&params.sensor, params.value);

    tracing::debug!(
        sensor = %params.sensor,
        value = params.value,
        status = %status,
        "Classified reading"
    );

    Ok(Json(DataResponse {
        data: ClassifyResponse {
            sensor: params.sensor,
            value: params.value,
            status,
            badge_color: status.badge_color(),
            position,
        },
    }))
}

/// POST /water-quality/evaluate
///
/// Evaluate a full reading set. Unknown sensors are reported in `ignored`
/// and do not affect the overall status.
pub async fn evaluate(Json(body): Json<EvaluateBody>) -> AppResult<impl IntoResponse> {
    if body.readings.len() > MAX_READINGS_PER_REQUEST {
        return Err(AppError::BadRequest(format!(
            "Cannot evaluate more than {MAX_READINGS_PER_REQUEST} readings at once"
        )));
    }
    for (name, value) in &body.readings {
        validate_finite_reading(*value, name)?;
    }

    let mut assessments = Vec::new();
    let mut ignored = Vec::new();
    for (name, value) in &body.readings {
        match SensorKind::from_str_value(name) {
            Some(kind) => assessments.push(water_quality::assess(SensorReading::new(kind, *value))),
            None => ignored.push(name.clone()),
        }
    }
    assessments.sort_by_key(|a| a.kind);

    if !ignored.is_empty() {
        tracing::debug!(ignored = ?ignored, "Skipping unknown sensors");
    }

    let result =
        water_quality::aggregate(body.readings.iter().map(|(name, value)| (name.as_str(), *value)));

    tracing::info!(
        overall = %result.overall,
        sensors = result.sensors.len(),
        is_potable = result.is_potable,
        "Water quality evaluated"
    );

    Ok(Json(DataResponse {
        data: EvaluateResponse {
            headline: result.headline(),
            summary: result.summary(),
            result,
            assessments,
            ignored,
            evaluated_at: chrono::Utc::now(),
        },
    }))
}

//! Water quality classification, aggregation and gauge normalisation.
//!
//! Every function here is a pure function of its inputs and the fixed
//! [`THRESHOLDS`](crate::threshold::THRESHOLDS) table. Calling one twice with
//! the same arguments always gives the same answer.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::sensor::{SensorKind, SensorReading};
use crate::threshold::{threshold_for, ThresholdBand, UPPER_BOUND_SAFE_FRACTION};
use crate::water_status::WaterStatus;

/// Gauge percentage bounds.
const POSITION_MIN: f64 = 0.0;
const POSITION_MAX: f64 = 100.0;

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify a single reading against its sensor's threshold band.
///
/// Two-sided bands:
/// - `Safe` if `min <= value <= max`
/// - `Warning` if `min - slack <= value <= max + slack`
/// - `Unsafe` otherwise
///
/// Upper-bounded bands:
/// - `Safe` if `value <= 0.8 * max`
/// - `Warning` if `value <= max`
/// - `Unsafe` otherwise
///
/// No range validation is done; a NaN reading falls through every comparison
/// and classifies as `Unsafe`.
pub fn classify(kind: SensorKind, value: f64) -> WaterStatus {
    classify_band(&threshold_for(kind).band, value)
}

fn classify_band(band: &ThresholdBand, value: f64) -> WaterStatus {
    match *band {
        ThresholdBand::TwoSided { min, max, slack } => {
            if (min..=max).contains(&value) {
                WaterStatus::Safe
            } else if (min - slack..=max + slack).contains(&value) {
                WaterStatus::Warning
            } else {
                WaterStatus::Unsafe
            }
        }
        ThresholdBand::UpperBounded { max } => {
            if value <= UPPER_BOUND_SAFE_FRACTION * max {
                WaterStatus::Safe
            } else if value <= max {
                WaterStatus::Warning
            } else {
                WaterStatus::Unsafe
            }
        }
    }
}

/// Classify a reading by sensor name.
///
/// Unknown sensor names return `Warning` as a conservative default.
pub fn classify_named(name: &str, value: f64) -> WaterStatus {
    match SensorKind::from_str_value(name) {
        Some(kind) => classify(kind, value),
        None => WaterStatus::Warning,
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Counts of sensors per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub total_sensors: usize,
    pub safe_count: usize,
    pub warning_count: usize,
    pub unsafe_count: usize,
}

/// Outcome of evaluating a full set of readings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaterQualityResult {
    /// Most severe status across all classified sensors.
    pub overall: WaterStatus,
    /// Status per known sensor. Unknown sensors never appear here.
    pub sensors: BTreeMap<SensorKind, WaterStatus>,
    /// `true` iff `overall` is `Safe`.
    pub is_potable: bool,
}

impl WaterQualityResult {
    pub fn headline(&self) -> &'static str {
        self.overall.headline()
    }

    pub fn summary(&self) -> StatusSummary {
        let mut summary = StatusSummary {
            total_sensors: self.sensors.len(),
            ..StatusSummary::default()
        };
        for status in self.sensors.values() {
            match status {
                WaterStatus::Safe => summary.safe_count += 1,
                WaterStatus::Warning => summary.warning_count += 1,
                WaterStatus::Unsafe => summary.unsafe_count += 1,
            }
        }
        summary
    }
}

/// Evaluate a set of `(sensor name, value)` readings.
///
/// Unknown sensor names are skipped. If a name appears more than once the
/// last value wins. With no known sensors the overall status is `Safe`.
pub fn aggregate<I, K>(readings: I) -> WaterQualityResult
where
    I: IntoIterator<Item = (K, f64)>,
    K: AsRef<str>,
{
    let sensors: BTreeMap<SensorKind, WaterStatus> = readings
        .into_iter()
        .filter_map(|(name, value)| {
            SensorKind::from_str_value(name.as_ref()).map(|kind| (kind, classify(kind, value)))
        })
        .collect();

    let overall = sensors.values().copied().max().unwrap_or_default();

    WaterQualityResult {
        overall,
        sensors,
        is_potable: overall == WaterStatus::Safe,
    }
}

// ---------------------------------------------------------------------------
// Gauge normalisation
// ---------------------------------------------------------------------------

/// Position of a reading within its safe range, as a percentage for gauges.
///
/// Two-sided bands score closeness to the midpoint: 100 at the midpoint,
/// 0 at either bound and beyond. Upper-bounded bands score `value / max`,
/// capped at 100. Results are always within `[0, 100]` for finite input.
///
/// Display only; [`classify`] is authoritative for safety.
pub fn normalized_position(kind: SensorKind, value: f64) -> f64 {
    let raw = match threshold_for(kind).band {
        ThresholdBand::TwoSided { min, max, .. } => {
            let half_range = (max - min) / 2.0;
            let midpoint = min + half_range;
            let deviation = (value - midpoint).abs();
            POSITION_MAX - (deviation / half_range) * POSITION_MAX
        }
        ThresholdBand::UpperBounded { max } => (value / max) * POSITION_MAX,
    };
    raw.clamp(POSITION_MIN, POSITION_MAX)
}

/// [`normalized_position`] by sensor name; `None` for unknown sensors.
pub fn normalized_position_named(name: &str, value: f64) -> Option<f64> {
    SensorKind::from_str_value(name).map(|kind| normalized_position(kind, value))
}

// ---------------------------------------------------------------------------
// Per-sensor assessment
// ---------------------------------------------------------------------------

/// Everything the dashboard shows for one sensor card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorAssessment {
    pub kind: SensorKind,
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub status: WaterStatus,
    pub position: f64,
}

/// Classify and normalise a single reading.
pub fn assess(reading: SensorReading) -> SensorAssessment {
    let threshold = threshold_for(reading.kind);
    SensorAssessment {
        kind: reading.kind,
        label: reading.kind.label(),
        value: reading.value,
        unit: threshold.unit,
        status: classify(reading.kind, reading.value),
        position: normalized_position(reading.kind, reading.value),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Safe-range threshold table for every sensor kind.
//!
//! Values follow WHO/EPA-style drinking water guidance and are fixed at
//! compile time. Each definition is tagged with its band family so the
//! classifier dispatches on the band shape, not on the sensor name.

use serde::Serialize;

use crate::sensor::SensorKind;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Upper-bounded sensors are safe up to this fraction of their ceiling.
pub const UPPER_BOUND_SAFE_FRACTION: f64 = 0.8;

pub const PH_MIN: f64 = 6.5;
pub const PH_MAX: f64 = 8.5;
pub const PH_SLACK: f64 = 0.5;

pub const TURBIDITY_MAX: f64 = 5.0;

pub const TDS_MAX: f64 = 500.0;

pub const TEMPERATURE_MIN: f64 = 15.0;
pub const TEMPERATURE_MAX: f64 = 25.0;
pub const TEMPERATURE_SLACK: f64 = 5.0;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Shape of a sensor's safe band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ThresholdBand {
    /// Low and high values are both unsafe. `slack` widens the band on each
    /// side for the warning zone.
    TwoSided { min: f64, max: f64, slack: f64 },
    /// Only exceeding `max` is unsafe.
    UpperBounded { max: f64 },
}

/// Threshold definition for one sensor kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorThreshold {
    pub kind: SensorKind,
    pub band: ThresholdBand,
    /// Display unit only; not used in classification.
    pub unit: &'static str,
}

impl SensorThreshold {
    /// Lower safe bound, `None` for upper-bounded sensors.
    pub fn min(&self) -> Option<f64> {
        match self.band {
            ThresholdBand::TwoSided { min, .. } => Some(min),
            ThresholdBand::UpperBounded { .. } => None,
        }
    }

    /// Upper safe bound.
    pub fn max(&self) -> f64 {
        match self.band {
            ThresholdBand::TwoSided { max, .. } | ThresholdBand::UpperBounded { max } => max,
        }
    }
}

/// The fixed threshold table, in [`SensorKind::ALL`] order.
pub const THRESHOLDS: [SensorThreshold; 4] = [
    SensorThreshold {
        kind: SensorKind::Ph,
        band: ThresholdBand::TwoSided {
            min: PH_MIN,
            max: PH_MAX,
            slack: PH_SLACK,
        },
        unit: "pH",
    },
    SensorThreshold {
        kind: SensorKind::Turbidity,
        band: ThresholdBand::UpperBounded { max: TURBIDITY_MAX },
        unit: "NTU",
    },
    SensorThreshold {
        kind: SensorKind::Tds,
        band: ThresholdBand::UpperBounded { max: TDS_MAX },
        unit: "ppm",
    },
    SensorThreshold {
        kind: SensorKind::Temperature,
        band: ThresholdBand::TwoSided {
            min: TEMPERATURE_MIN,
            max: TEMPERATURE_MAX,
            slack: TEMPERATURE_SLACK,
        },
        unit: "°C",
    },
];

/// Threshold definition for a sensor kind.
pub fn threshold_for(kind: SensorKind) -> &'static SensorThreshold {
    match kind {
        SensorKind::Ph => &THRESHOLDS[0],
        SensorKind::Turbidity => &THRESHOLDS[1],
        SensorKind::Tds => &THRESHOLDS[2],
        SensorKind::Temperature => &THRESHOLDS[3],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Sensor identities and readings.
//!
//! The sensor set is closed: pH, turbidity, TDS and temperature. Anything
//! else arriving from a caller is an "unknown" sensor, which the evaluator
//! handles with a fallback rather than an error.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const SENSOR_PH: &str = "ph";
pub const SENSOR_TURBIDITY: &str = "turbidity";
pub const SENSOR_TDS: &str = "tds";
pub const SENSOR_TEMPERATURE: &str = "temperature";

/// All valid sensor names.
pub const VALID_SENSOR_NAMES: &[&str] =
    &[SENSOR_PH, SENSOR_TURBIDITY, SENSOR_TDS, SENSOR_TEMPERATURE];

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// A water quality sensor fitted to the tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    Ph,
    Turbidity,
    Tds,
    Temperature,
}

impl SensorKind {
    /// Every sensor kind, in dashboard display order.
    pub const ALL: [SensorKind; 4] = [Self::Ph, Self::Turbidity, Self::Tds, Self::Temperature];

    /// Look up a sensor by its wire name. Unknown names yield `None`.
    pub fn from_str_value(s: &str) -> Option<Self> {
        match s {
            SENSOR_PH => Some(Self::Ph),
            SENSOR_TURBIDITY => Some(Self::Turbidity),
            SENSOR_TDS => Some(Self::Tds),
            SENSOR_TEMPERATURE => Some(Self::Temperature),
            _ => None,
        }
    }

    /// Convert to the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ph => SENSOR_PH,
            Self::Turbidity => SENSOR_TURBIDITY,
            Self::Tds => SENSOR_TDS,
            Self::Temperature => SENSOR_TEMPERATURE,
        }
    }

    /// Human-readable name for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ph => "pH Level",
            Self::Turbidity => "Turbidity",
            Self::Tds => "TDS",
            Self::Temperature => "Temperature",
        }
    }
}

impl std::fmt::Display for SensorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// A single value read from one sensor. Not retained by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub kind: SensorKind,
    pub value: f64,
}

impl SensorReading {
    pub fn new(kind: SensorKind, value: f64) -> Self {
        Self { kind, value }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

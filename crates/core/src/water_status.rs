//! Water safety status levels.
//!
//! The wire values (`safe`, `warning`, `unsafe`) are what the dashboard
//! matches on to pick badge colours and the headline message.

use serde::{Deserialize, Serialize};

/// Reading is inside the safe band.
pub const STATUS_SAFE: &str = "safe";

/// Reading is outside the safe band but within tolerance.
pub const STATUS_WARNING: &str = "warning";

/// Reading is beyond tolerance.
pub const STATUS_UNSAFE: &str = "unsafe";

/// Safety classification, ordered by severity: `Safe < Warning < Unsafe`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum WaterStatus {
    #[default]
    Safe,
    Warning,
    Unsafe,
}

impl WaterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => STATUS_SAFE,
            Self::Warning => STATUS_WARNING,
            Self::Unsafe => STATUS_UNSAFE,
        }
    }

    /// Badge text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::Warning => "Warning",
            Self::Unsafe => "Unsafe",
        }
    }

    /// Badge colour name.
    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::Safe => "green",
            Self::Warning => "amber",
            Self::Unsafe => "red",
        }
    }

    /// Dashboard headline when this is the overall status.
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Safe => "Water is Potable",
            Self::Warning => "Caution Advised",
            Self::Unsafe => "Not Safe to Drink",
        }
    }
}

impl std::fmt::Display for WaterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_by_severity() {
        assert!(WaterStatus::Safe < WaterStatus::Warning);
        assert!(WaterStatus::Warning < WaterStatus::Unsafe);
        assert_eq!(
            [WaterStatus::Warning, WaterStatus::Unsafe, WaterStatus::Safe]
                .into_iter()
                .max(),
            Some(WaterStatus::Unsafe)
        );
    }

    #[test]
    fn default_is_safe() {
        assert_eq!(WaterStatus::default(), WaterStatus::Safe);
    }

    #[test]
    fn presentation_strings() {
        assert_eq!(WaterStatus::Safe.badge_color(), "green");
        assert_eq!(WaterStatus::Warning.badge_color(), "amber");
        assert_eq!(WaterStatus::Unsafe.badge_color(), "red");
        assert_eq!(WaterStatus::Warning.headline(), "Caution Advised");
        assert_eq!(WaterStatus::Unsafe.label(), "Unsafe");
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&WaterStatus::Unsafe).unwrap();
        assert_eq!(json, "\"unsafe\"");
        assert_eq!(WaterStatus::Warning.to_string(), STATUS_WARNING);
    }
}

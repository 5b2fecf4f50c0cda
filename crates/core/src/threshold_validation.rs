//! Shared reading validation helpers.
//!
//! The evaluator accepts any finite number. These checks run at the input
//! boundary, before a value reaches classification.

use crate::error::CoreError;

/// Validate that a reading is a finite number (not NaN or infinite).
///
/// Returns a `CoreError::Validation` naming the field otherwise. Out of range
/// but finite values (negative turbidity, say) are accepted.
pub fn validate_finite_reading(value: f64, name: &str) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::Validation(format!(
            "{name} must be a finite number, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_finite_values() {
        assert!(validate_finite_reading(0.0, "ph").is_ok());
        assert!(validate_finite_reading(7.2, "ph").is_ok());
        assert!(validate_finite_reading(1.0e9, "tds").is_ok());
    }

    #[test]
    fn accepts_out_of_range_values() {
        assert!(validate_finite_reading(-3.0, "turbidity").is_ok());
    }

    #[test]
    fn rejects_nan() {
        assert_matches!(
            validate_finite_reading(f64::NAN, "ph"),
            Err(CoreError::Validation(msg)) if msg.contains("ph")
        );
    }

    #[test]
    fn rejects_infinity() {
        assert!(validate_finite_reading(f64::INFINITY, "tds").is_err());
        assert!(validate_finite_reading(f64::NEG_INFINITY, "tds").is_err());
    }
}

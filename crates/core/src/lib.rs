//! Water quality evaluation for the rainwater harvesting dashboard.
//!
//! The crate is pure: no I/O, no shared mutable state. Callers pass sensor
//! readings in and get statuses and gauge percentages back.

pub mod error;
pub mod sensor;
pub mod threshold;
pub mod threshold_validation;
pub mod types;
pub mod water_quality;
pub mod water_status;

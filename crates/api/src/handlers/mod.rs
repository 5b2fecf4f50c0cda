pub mod water_quality;

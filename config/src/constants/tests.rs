//! Tests for the centralized configuration constants.

use super::*;

#[test]
fn default_constants_are_valid() {
    let config = DomeConfig::default();
    assert!(config.peak_factor > 0.0);
    assert!(config.subdivisions <= MAX_SUBDIVISIONS);
}

#[test]
fn default_round_trips_through_new() {
    let config = DomeConfig::new(DEFAULT_SUBDIVISIONS, DEFAULT_PEAK_FACTOR).unwrap();
    assert_eq!(config, DomeConfig::default());
}

#[test]
fn new_validates_inputs() {
    assert_eq!(
        DomeConfig::new(MAX_SUBDIVISIONS + 1, 1.025).unwrap_err(),
        ConfigError::InvalidSubdivisions(MAX_SUBDIVISIONS + 1)
    );
    assert_eq!(
        DomeConfig::new(3, 0.0).unwrap_err(),
        ConfigError::InvalidPeakFactor(0.0)
    );
    assert_eq!(
        DomeConfig::new(3, -1.0).unwrap_err(),
        ConfigError::InvalidPeakFactor(-1.0)
    );
}

#[test]
fn epsilon_is_small_and_positive() {
    assert!(EPSILON_TOLERANCE > 0.0);
    assert!(EPSILON_TOLERANCE < 1.0e-6);
}

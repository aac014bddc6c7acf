//! Centralized configuration values shared across the geodome pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Numerical tolerance used by the geometry kernel. A vector whose magnitude
/// falls below this value cannot be normalized.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Default number of recursive midpoint-subdivision levels applied to each
/// fan triangle before peaking.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SUBDIVISIONS;
/// assert_eq!(DEFAULT_SUBDIVISIONS, 3);
/// ```
pub const DEFAULT_SUBDIVISIONS: u32 = 3;

/// Upper bound on subdivision levels. Facet count grows as `4^levels`, so
/// this caps a run at a few million facets.
///
/// # Examples
/// ```
/// use config::constants::MAX_SUBDIVISIONS;
/// assert!(MAX_SUBDIVISIONS >= 3);
/// ```
pub const MAX_SUBDIVISIONS: u32 = 8;

/// Default magnitude of the apex point introduced when a leaf triangle is
/// raised into a three-sided pyramid. Values slightly above 1.0 produce the
/// shallow faceted relief; 1.0 would leave the apex on the sphere.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_PEAK_FACTOR;
/// assert!(DEFAULT_PEAK_FACTOR > 1.0);
/// ```
pub const DEFAULT_PEAK_FACTOR: f64 = 1.025;

/// Solid name embedded in the STL header and trailer lines.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SOLID_NAME;
/// assert!(!DEFAULT_SOLID_NAME.contains(' '));
/// ```
pub const DEFAULT_SOLID_NAME: &str = "spaceship_earth";

/// Immutable snapshot of the parameters that shape a generated dome.
///
/// # Examples
/// ```
/// use config::constants::DomeConfig;
/// let config = DomeConfig::default();
/// assert!(config.peak_factor > 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomeConfig {
    /// Recursive subdivision levels applied to each fan triangle.
    pub subdivisions: u32,
    /// Magnitude of the synthetic apex point of each peaked triangle.
    pub peak_factor: f64,
}

impl DomeConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// subdivision level and peak factor.
    ///
    /// # Examples
    /// ```
    /// use config::constants::DomeConfig;
    /// let config = DomeConfig::new(2, 1.05).expect("valid config");
    /// assert_eq!(config.subdivisions, 2);
    /// ```
    pub fn new(subdivisions: u32, peak_factor: f64) -> Result<Self, ConfigError> {
        if subdivisions > MAX_SUBDIVISIONS {
            return Err(ConfigError::InvalidSubdivisions(subdivisions));
        }
        if peak_factor <= 0.0 {
            return Err(ConfigError::InvalidPeakFactor(peak_factor));
        }
        Ok(Self {
            subdivisions,
            peak_factor,
        })
    }
}

impl Default for DomeConfig {
    fn default() -> Self {
        Self {
            subdivisions: DEFAULT_SUBDIVISIONS,
            peak_factor: DEFAULT_PEAK_FACTOR,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the requested subdivision level exceeds [`MAX_SUBDIVISIONS`].
    InvalidSubdivisions(u32),
    /// Raised when the peak factor is zero or negative, which would collapse
    /// or invert the pyramids.
    InvalidPeakFactor(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSubdivisions(value) => {
                write!(f, "subdivisions must be <= {MAX_SUBDIVISIONS}: {value}")
            }
            ConfigError::InvalidPeakFactor(value) => {
                write!(f, "peak_factor must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;

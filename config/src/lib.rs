//! # Config Crate
//!
//! Centralized configuration constants for the geodome pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DomeConfig, DEFAULT_PEAK_FACTOR, DEFAULT_SUBDIVISIONS};
//!
//! let config = DomeConfig::default();
//! assert_eq!(config.subdivisions, DEFAULT_SUBDIVISIONS);
//! assert_eq!(config.peak_factor, DEFAULT_PEAK_FACTOR);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: Invalid parameter combinations are rejected at
//!   configuration time, before any geometry is generated
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

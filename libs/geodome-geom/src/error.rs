//! # Geometry Errors
//!
//! Error types for dome generation.

use thiserror::Error;

/// Errors that can occur while generating the dome.
#[derive(Debug, Error)]
pub enum GeomError {
    /// Degenerate geometry, such as normalizing a near-zero vector
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// A sink failed to consume a finished facet
    #[error("Sink write failed: {0}")]
    Sink(#[from] std::io::Error),
}

impl GeomError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}

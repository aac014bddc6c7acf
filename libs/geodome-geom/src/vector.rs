//! # Vector Math
//!
//! Pure geometric primitives on 3D points. All "on-sphere" subdivision in
//! this pipeline works by taking a flat Euclidean midpoint or centroid and
//! immediately rescaling it back onto the sphere via [`scale`], rather than
//! by spherical interpolation. Facets near original dodecahedron vertices
//! therefore come out slightly smaller than facets near face centers; that
//! density distortion is an expected property of the output.

use crate::error::GeomError;
use config::constants::EPSILON_TOLERANCE;
use glam::DVec3;

/// Returns the point with the direction of `v` and magnitude `length`.
///
/// # Errors
///
/// Returns [`GeomError::DegenerateGeometry`] when `v` has near-zero
/// magnitude, since its direction is undefined. Failing here keeps NaN
/// coordinates out of all downstream geometry.
///
/// # Example
///
/// ```rust
/// use geodome_geom::vector::scale;
/// use glam::DVec3;
///
/// let v = scale(DVec3::new(3.0, 0.0, 0.0), 6.0).unwrap();
/// assert_eq!(v, DVec3::new(6.0, 0.0, 0.0));
/// ```
pub fn scale(v: DVec3, length: f64) -> Result<DVec3, GeomError> {
    let magnitude = v.length();
    if magnitude < EPSILON_TOLERANCE {
        return Err(GeomError::degenerate(format!(
            "cannot scale near-zero vector {:?} (magnitude {})",
            v, magnitude
        )));
    }
    Ok(v * (length / magnitude))
}

/// Returns the unit vector normal to the plane through `p0`, `p1` and `p2`.
///
/// The direction follows the winding order of the inputs: points arranged
/// counter-clockwise as viewed from outside the sphere yield an
/// outward-pointing normal.
///
/// # Errors
///
/// Returns [`GeomError::DegenerateGeometry`] when the points are collinear
/// or coincident, since their cross product has near-zero magnitude.
pub fn normal(p0: DVec3, p1: DVec3, p2: DVec3) -> Result<DVec3, GeomError> {
    let a = p1 - p0;
    let b = p2 - p0;
    scale(a.cross(b), 1.0)
}

/// Returns the component-wise mean of two points.
///
/// This is a flat Euclidean midpoint, not a great-circle midpoint; callers
/// that need a point on the sphere rescale the result via [`scale`].
pub fn midpoint(p1: DVec3, p2: DVec3) -> DVec3 {
    (p1 + p2) / 2.0
}

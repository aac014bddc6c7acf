//! # Subdivision
//!
//! Decomposes spherical pentagons into triangle fans and recursively splits
//! each spherical triangle into four smaller ones, re-projecting new vertices
//! onto the unit sphere at every level.

use crate::error::GeomError;
use crate::peak::peak_triangle;
use crate::pipeline::TriangleSink;
use crate::vector::{midpoint, normal, scale};
use crate::{Pentagon, Triangle};

/// Fans one spherical pentagon into 5 triangles and subdivides each.
///
/// The fan center is the unit normal of the pentagon's first three vertices.
/// For an on-sphere face this lands just above the face interior rather than
/// at the true centroid; the offset is part of the characteristic look and
/// is kept as-is. Each fan triangle `{center, p[i], p[(i+1)%5]}` preserves
/// the pentagon's outward winding.
pub fn subdivide_pentagon<S: TriangleSink>(
    pentagon: &Pentagon,
    subdivisions: u32,
    peak_factor: f64,
    sink: &mut S,
) -> Result<(), GeomError> {
    let center = normal(pentagon[0], pentagon[1], pentagon[2])?;

    for i in 0..5 {
        let fan = [center, pentagon[i], pentagon[(i + 1) % 5]];
        subdivide_triangle(&fan, subdivisions, peak_factor, sink)?;
    }

    Ok(())
}

/// Recursively splits a spherical triangle into 4 smaller triangles.
///
/// At depth 0 the triangle is a leaf and is handed to
/// [`peak_triangle`](crate::peak::peak_triangle). Otherwise the three edge
/// midpoints are computed, re-projected onto the unit sphere, and the four
/// children are visited depth-first with one less level remaining. Depth `d`
/// yields exactly `4^d` leaf triangles.
pub fn subdivide_triangle<S: TriangleSink>(
    triangle: &Triangle,
    subdivisions: u32,
    peak_factor: f64,
    sink: &mut S,
) -> Result<(), GeomError> {
    if subdivisions == 0 {
        return peak_triangle(triangle, peak_factor, sink);
    }

    let [v0, v1, v2] = *triangle;

    // Edge midpoints, back onto the unit sphere.
    let m0 = scale(midpoint(v0, v1), 1.0)?;
    let m1 = scale(midpoint(v1, v2), 1.0)?;
    let m2 = scale(midpoint(v2, v0), 1.0)?;

    // One corner triangle per parent vertex plus the inner triangle, all
    // preserving the parent's winding.
    let children: [Triangle; 4] = [
        [v0, m0, m2],
        [v1, m1, m0],
        [v2, m2, m1],
        [m0, m1, m2],
    ];

    for child in &children {
        subdivide_triangle(child, subdivisions - 1, peak_factor, sink)?;
    }

    Ok(())
}

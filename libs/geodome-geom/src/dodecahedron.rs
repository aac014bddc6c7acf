//! # Dodecahedron Builder
//!
//! Produces the 12 pentagonal faces of a regular dodecahedron, scaled to a
//! circumscribed radius of 1.0, as fixed seed data for the subdivision
//! pipeline.

use crate::error::GeomError;
use crate::vector::scale;
use crate::Pentagon;
use glam::DVec3;

/// Builds the 12 faces of a regular dodecahedron with every vertex on the
/// unit sphere.
///
/// Uses the standard golden-ratio construction: 8 cube vertices at
/// (±1, ±1, ±1) plus three mutually orthogonal golden rectangles built from
/// φ and 1/φ. The raw vertex set has circumscribed radius √3; each vertex is
/// rescaled to radius 1.0 before being returned. Face winding is
/// counter-clockwise as viewed from outside the solid.
///
/// Pure data construction: deterministic, no input, always the same
/// 12×5 point table.
///
/// # Example
///
/// ```rust
/// use geodome_geom::dodecahedron;
///
/// let faces = dodecahedron().unwrap();
/// assert_eq!(faces.len(), 12);
/// ```
pub fn dodecahedron() -> Result<[Pentagon; 12], GeomError> {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let inv = 1.0 / phi;

    // Cube vertices.
    let a = [
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(1.0, 1.0, -1.0),
        DVec3::new(1.0, -1.0, 1.0),
        DVec3::new(1.0, -1.0, -1.0),
        DVec3::new(-1.0, 1.0, 1.0),
        DVec3::new(-1.0, 1.0, -1.0),
        DVec3::new(-1.0, -1.0, 1.0),
        DVec3::new(-1.0, -1.0, -1.0),
    ];

    // Golden rectangle in the yz-plane.
    let b = [
        DVec3::new(0.0, phi, inv),
        DVec3::new(0.0, phi, -inv),
        DVec3::new(0.0, -phi, inv),
        DVec3::new(0.0, -phi, -inv),
    ];

    // Golden rectangle in the xz-plane.
    let c = [
        DVec3::new(inv, 0.0, phi),
        DVec3::new(inv, 0.0, -phi),
        DVec3::new(-inv, 0.0, phi),
        DVec3::new(-inv, 0.0, -phi),
    ];

    // Golden rectangle in the xy-plane.
    let d = [
        DVec3::new(phi, inv, 0.0),
        DVec3::new(phi, -inv, 0.0),
        DVec3::new(-phi, inv, 0.0),
        DVec3::new(-phi, -inv, 0.0),
    ];

    let mut faces: [Pentagon; 12] = [
        [b[0], a[0], d[0], a[1], b[1]],
        [b[1], a[5], d[2], a[4], b[0]],
        [b[2], a[6], d[3], a[7], b[3]],
        [b[3], a[3], d[1], a[2], b[2]],
        [c[0], a[0], b[0], a[4], c[2]],
        [c[1], a[3], b[3], a[7], c[3]],
        [c[2], a[6], b[2], a[2], c[0]],
        [c[3], a[5], b[1], a[1], c[1]],
        [d[0], a[0], c[0], a[2], d[1]],
        [d[1], a[3], c[1], a[1], d[0]],
        [d[2], a[5], c[3], a[7], d[3]],
        [d[3], a[6], c[2], a[4], d[2]],
    ];

    for face in &mut faces {
        for vertex in face.iter_mut() {
            *vertex = scale(*vertex, 1.0)?;
        }
    }

    Ok(faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::normal;
    use approx::assert_relative_eq;

    #[test]
    fn test_twelve_faces_of_five_vertices() {
        let faces = dodecahedron().unwrap();
        assert_eq!(faces.len(), 12);
        for face in &faces {
            assert_eq!(face.len(), 5);
        }
    }

    #[test]
    fn test_every_vertex_on_unit_sphere() {
        for face in dodecahedron().unwrap() {
            for vertex in face {
                assert_relative_eq!(vertex.length(), 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_face_vertices_are_distinct() {
        for face in dodecahedron().unwrap() {
            for i in 0..5 {
                for j in (i + 1)..5 {
                    assert!((face[i] - face[j]).length() > 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_winding_is_outward() {
        // For a face wound counter-clockwise from outside, the normal of the
        // first three vertices points away from the origin.
        for face in dodecahedron().unwrap() {
            let n = normal(face[0], face[1], face[2]).unwrap();
            let center = face.iter().sum::<DVec3>() / 5.0;
            assert!(n.dot(center) > 0.0);
        }
    }

    #[test]
    fn test_construction_is_deterministic() {
        assert_eq!(dodecahedron().unwrap(), dodecahedron().unwrap());
    }

    #[test]
    fn test_shared_vertices_across_faces() {
        // Every dodecahedron vertex belongs to exactly 3 of the 12 faces,
        // so the 60 table entries cover 20 distinct vertices.
        let faces = dodecahedron().unwrap();
        let mut distinct: Vec<DVec3> = Vec::new();
        for face in &faces {
            for vertex in face {
                if !distinct.iter().any(|v| (*v - *vertex).length() < 1e-9) {
                    distinct.push(*vertex);
                }
            }
        }
        assert_eq!(distinct.len(), 20);
    }
}

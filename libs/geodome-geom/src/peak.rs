//! # Peak Transformer
//!
//! Raises each flat leaf triangle into a shallow three-sided pyramid, the
//! faceted relief characteristic of the dome.

use crate::error::GeomError;
use crate::pipeline::TriangleSink;
use crate::vector::{normal, scale};
use crate::Triangle;

/// Converts a leaf triangle into 3 pyramid facets and forwards them to the
/// sink.
///
/// The apex is the triangle's outward unit normal scaled to `peak_factor`.
/// With the leaf's vertices on the unit sphere and a factor slightly above
/// 1.0, the apex sits just outside the sphere, forming visible relief. The
/// three facets `{apex, t0, t1}`, `{apex, t1, t2}`, `{apex, t2, t0}` keep
/// the outward winding of the input.
pub fn peak_triangle<S: TriangleSink>(
    triangle: &Triangle,
    peak_factor: f64,
    sink: &mut S,
) -> Result<(), GeomError> {
    let [t0, t1, t2] = *triangle;
    let apex = scale(normal(t0, t1, t2)?, peak_factor)?;

    let facets: [Triangle; 3] = [[apex, t0, t1], [apex, t1, t2], [apex, t2, t0]];
    for facet in &facets {
        sink.accept(facet)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::FacetList;
    use approx::assert_relative_eq;
    use glam::DVec3;

    fn unit_triangle() -> Triangle {
        [
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn test_produces_three_facets_sharing_apex() {
        let mut facets = FacetList::new();
        peak_triangle(&unit_triangle(), 1.025, &mut facets).unwrap();
        assert_eq!(facets.facet_count(), 3);

        let apex = facets.facets()[0][0];
        for facet in facets.facets() {
            assert_eq!(facet[0], apex);
        }
    }

    #[test]
    fn test_apex_magnitude_is_peak_factor() {
        let peak_factor = 1.025;
        let mut facets = FacetList::new();
        peak_triangle(&unit_triangle(), peak_factor, &mut facets).unwrap();
        let apex = facets.facets()[0][0];
        assert_relative_eq!(apex.length(), peak_factor, epsilon = 1e-12);
    }

    #[test]
    fn test_base_edges_cover_the_input() {
        let tri = unit_triangle();
        let mut facets = FacetList::new();
        peak_triangle(&tri, 1.025, &mut facets).unwrap();

        let bases: Vec<[DVec3; 2]> = facets.facets().iter().map(|f| [f[1], f[2]]).collect();
        assert_eq!(bases[0], [tri[0], tri[1]]);
        assert_eq!(bases[1], [tri[1], tri[2]]);
        assert_eq!(bases[2], [tri[2], tri[0]]);
    }

    #[test]
    fn test_facets_wind_outward() {
        let mut facets = FacetList::new();
        peak_triangle(&unit_triangle(), 1.025, &mut facets).unwrap();
        for facet in facets.facets() {
            let n = crate::vector::normal(facet[0], facet[1], facet[2]).unwrap();
            let centroid = (facet[0] + facet[1] + facet[2]) / 3.0;
            assert!(n.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn test_degenerate_input_fails() {
        let collinear: Triangle = [
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(0.0, 0.0, 2.0),
            DVec3::new(0.0, 0.0, 3.0),
        ];
        let mut facets = FacetList::new();
        assert!(peak_triangle(&collinear, 1.025, &mut facets).is_err());
    }
}

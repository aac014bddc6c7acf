//! # Pipeline Driver
//!
//! Runs the full dome construction as one single-threaded depth-first
//! traversal: 12 pentagons, 5 fan triangles each, `4^subdivisions` leaves
//! per fan triangle, 3 peak facets per leaf. Facets reach the sink in
//! traversal order, which is stable across runs; consumers of the mesh
//! format treat facets as an unordered set, so the order carries no
//! semantic weight.

use crate::dodecahedron::dodecahedron;
use crate::error::GeomError;
use crate::subdivide::subdivide_pentagon;
use crate::Triangle;
use config::constants::DomeConfig;

/// Consumer of finished facets.
///
/// The driver forwards each facet exactly once, in traversal order. A sink
/// failure aborts the run; facets already consumed are not retracted.
pub trait TriangleSink {
    /// Consumes one finished facet.
    fn accept(&mut self, triangle: &Triangle) -> Result<(), GeomError>;
}

/// Number of facets a run with the given subdivision level produces.
///
/// # Example
///
/// ```rust
/// use geodome_geom::expected_facets;
///
/// assert_eq!(expected_facets(0), 180);
/// assert_eq!(expected_facets(3), 11_520);
/// ```
pub fn expected_facets(subdivisions: u32) -> usize {
    12 * 5 * 4usize.pow(subdivisions) * 3
}

/// Generates the dome described by `config`, forwarding every facet to
/// `sink`.
///
/// Deterministic: two runs with identical parameters produce identical
/// facet sequences.
///
/// # Example
///
/// ```rust
/// use config::constants::DomeConfig;
/// use geodome_geom::{expected_facets, generate, FacetList};
///
/// let config = DomeConfig::new(1, 1.025).unwrap();
/// let mut facets = FacetList::new();
/// generate(&config, &mut facets).unwrap();
/// assert_eq!(facets.facet_count(), expected_facets(1));
/// ```
pub fn generate<S: TriangleSink>(config: &DomeConfig, sink: &mut S) -> Result<(), GeomError> {
    for pentagon in dodecahedron()? {
        subdivide_pentagon(&pentagon, config.subdivisions, config.peak_factor, sink)?;
    }
    Ok(())
}

/// Returns the distinct on-sphere vertices where pyramid bases meet.
///
/// Every facet's second vertex is a base corner of some pyramid; collecting
/// them and dropping duplicates yields the vertex set of the underlying
/// (pre-peak) triangulation. Useful for placing point features such as
/// lights or anchors on the dome surface.
///
/// Duplicates are dropped by exact equality. Shared positions are computed
/// from the same operands on both sides of a shared edge (component-wise
/// means commute), so they compare bit-identical.
///
/// # Example
///
/// ```rust
/// use config::constants::DomeConfig;
/// use geodome_geom::distinct_base_vertices;
///
/// let config = DomeConfig::new(0, 1.025).unwrap();
/// // 20 dodecahedron vertices plus 12 fan centers.
/// assert_eq!(distinct_base_vertices(&config).unwrap().len(), 32);
/// ```
pub fn distinct_base_vertices(config: &DomeConfig) -> Result<Vec<glam::DVec3>, GeomError> {
    let mut facets = FacetList::with_capacity(expected_facets(config.subdivisions));
    generate(config, &mut facets)?;

    let mut distinct: Vec<glam::DVec3> = Vec::new();
    for facet in facets.facets() {
        let base = facet[1];
        if !distinct.contains(&base) {
            distinct.push(base);
        }
    }
    Ok(distinct)
}

/// Sink that accumulates facets in memory.
///
/// Facets are stored as independent vertex triples; shared edges and
/// vertices between adjacent facets are duplicated rather than indexed,
/// matching the facet-list model of the output format.
#[derive(Debug, Default)]
pub struct FacetList {
    facets: Vec<Triangle>,
}

impl FacetList {
    /// Creates an empty facet list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a facet list with pre-allocated capacity.
    pub fn with_capacity(facet_count: usize) -> Self {
        Self {
            facets: Vec::with_capacity(facet_count),
        }
    }

    /// Returns the number of facets collected so far.
    #[inline]
    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    /// Returns the collected facets.
    #[inline]
    pub fn facets(&self) -> &[Triangle] {
        &self.facets
    }

    /// Consumes the list, returning the collected facets.
    pub fn into_facets(self) -> Vec<Triangle> {
        self.facets
    }
}

impl TriangleSink for FacetList {
    fn accept(&mut self, triangle: &Triangle) -> Result<(), GeomError> {
        self.facets.push(*triangle);
        Ok(())
    }
}

//! # Geodome Geometry
//!
//! Geometry kernel for a Spaceship Earth-style geodesic sphere: a regular
//! dodecahedron whose spherical faces are fanned into triangles, recursively
//! subdivided onto the unit sphere, and finally raised into shallow
//! three-sided pyramids.
//!
//! ## Architecture
//!
//! ```text
//! dodecahedron → subdivide (pentagon fan, recursive triangles) → peak → sink
//! ```
//!
//! The traversal is depth-first and single-threaded; every finished facet is
//! handed to a [`TriangleSink`] in traversal order.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::DomeConfig;
//! use geodome_geom::{generate, FacetList};
//!
//! let config = DomeConfig::new(0, 1.025).unwrap();
//! let mut facets = FacetList::new();
//! generate(&config, &mut facets).unwrap();
//! assert_eq!(facets.facet_count(), 180);
//! ```

pub mod dodecahedron;
pub mod error;
pub mod peak;
pub mod pipeline;
pub mod subdivide;
pub mod vector;

use glam::DVec3;

pub use dodecahedron::dodecahedron;
pub use error::GeomError;
pub use peak::peak_triangle;
pub use pipeline::{distinct_base_vertices, expected_facets, generate, FacetList, TriangleSink};
pub use subdivide::{subdivide_pentagon, subdivide_triangle};
pub use vector::{midpoint, normal, scale};

/// A mesh facet: three vertices in counter-clockwise order as viewed from
/// outside the sphere, so the computed face normal points outward.
pub type Triangle = [DVec3; 3];

/// One dodecahedron face: five vertices, consecutive around the boundary,
/// counter-clockwise as viewed from outside the solid.
pub type Pentagon = [DVec3; 5];

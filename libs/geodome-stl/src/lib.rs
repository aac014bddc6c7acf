//! # Geodome STL
//!
//! ASCII STL serialization for the geodome pipeline.
//!
//! ## Architecture
//!
//! ```text
//! geodome-geom (facets) → geodome-stl (ASCII STL document)
//! ```
//!
//! The writer implements the geometry kernel's sink trait, so facets stream
//! straight from the traversal into the output without being buffered as a
//! mesh first.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::DomeConfig;
//! use geodome_stl::write_dome;
//!
//! let config = DomeConfig::new(0, 1.025).unwrap();
//! let mut buffer = Vec::new();
//! let facets = write_dome(&config, "dome", &mut buffer).unwrap();
//! assert_eq!(facets, 180);
//! ```

pub mod writer;

pub use writer::StlWriter;

use config::constants::DomeConfig;
use geodome_geom::{generate, GeomError};
use std::io::Write;

/// Runs the full pipeline, serializing the dome described by `config` into
/// `writer` as an ASCII STL document named `name`.
///
/// Returns the number of facets written. I/O failures and degenerate
/// geometry abort the run; output already written is not retracted.
pub fn write_dome<W: Write>(
    config: &DomeConfig,
    name: &str,
    writer: W,
) -> Result<usize, GeomError> {
    let mut sink = StlWriter::new(writer, name)?;
    generate(config, &mut sink)?;
    let facets = sink.facet_count();
    sink.finish()?;
    Ok(facets)
}

//! # STL Writer
//!
//! Streams facets into an ASCII STL document: a `solid` header, one facet
//! record per triangle, and an `endsolid` trailer. Every facet is emitted
//! independently; shared vertices between adjacent facets are duplicated,
//! matching the format's facet-list model.

use geodome_geom::vector::normal;
use geodome_geom::{GeomError, Triangle, TriangleSink};
use std::io::Write;

/// ASCII STL serializer implementing [`TriangleSink`].
///
/// Writes the `solid <name>` header on construction. Each accepted facet
/// becomes one facet record with its outward normal recomputed from the
/// vertex winding. [`finish`](StlWriter::finish) writes the matching
/// `endsolid <name>` trailer and flushes.
///
/// # Example
///
/// ```rust
/// use geodome_stl::StlWriter;
/// use geodome_geom::TriangleSink;
/// use glam::DVec3;
///
/// let mut writer = StlWriter::new(Vec::new(), "demo").unwrap();
/// let facet = [DVec3::X, DVec3::Y, DVec3::Z];
/// writer.accept(&facet).unwrap();
/// let bytes = writer.finish().unwrap();
/// assert!(String::from_utf8(bytes).unwrap().contains("endsolid demo"));
/// ```
pub struct StlWriter<W: Write> {
    writer: W,
    name: String,
    facet_count: usize,
}

impl<W: Write> StlWriter<W> {
    /// Creates a writer and emits the document header.
    pub fn new(mut writer: W, name: impl Into<String>) -> Result<Self, GeomError> {
        let name = name.into();
        writeln!(writer, "solid {name}")?;
        writeln!(writer)?;
        Ok(Self {
            writer,
            name,
            facet_count: 0,
        })
    }

    /// Returns the number of facet records written so far.
    #[inline]
    pub fn facet_count(&self) -> usize {
        self.facet_count
    }

    /// Writes the document trailer, flushes, and returns the inner writer.
    pub fn finish(mut self) -> Result<W, GeomError> {
        writeln!(self.writer, "endsolid {}", self.name)?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> TriangleSink for StlWriter<W> {
    fn accept(&mut self, triangle: &Triangle) -> Result<(), GeomError> {
        let n = normal(triangle[0], triangle[1], triangle[2])?;

        writeln!(
            self.writer,
            "facet normal {:.6} {:.6} {:.6}",
            n.x, n.y, n.z
        )?;
        writeln!(self.writer, "\touter loop")?;
        for vertex in triangle {
            writeln!(
                self.writer,
                "\t\tvertex {:.6} {:.6} {:.6}",
                vertex.x, vertex.y, vertex.z
            )?;
        }
        writeln!(self.writer, "\tendloop")?;
        writeln!(self.writer, "endfacet")?;
        writeln!(self.writer)?;

        self.facet_count += 1;
        Ok(())
    }
}

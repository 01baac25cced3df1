use crate::{Vector3, C};
use std::fmt;

/// A single triangle of an STL mesh.
///
/// Vertices are ordered counter-clockwise when viewed from the side
/// `normal` points to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facet {
    pub normal: Vector3,
    pub vertices: [Vector3; 3],
}

impl Facet {
    pub const fn new(normal: Vector3, vertices: [Vector3; 3]) -> Self {
        Self { normal, vertices }
    }

    /// Returns this triangle's area.
    pub fn area(&self) -> C {
        let [a, b, c] = self.vertices;
        (b - a).cross(c - a).norm() / 2.0
    }

    /// Returns the normal implied by the vertex winding, unnormalized.
    ///
    /// Zero for degenerate triangles.
    pub fn winding_normal(&self) -> Vector3 {
        let [a, b, c] = self.vertices;
        (b - a).cross(c - a)
    }
}

/// Formats the facet as an ASCII STL `facet ... endfacet` record, each
/// line terminated by `\n`.
impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [v0, v1, v2] = &self.vertices;
        writeln!(f, "facet normal {}", self.normal)?;
        writeln!(f, "outer loop")?;
        writeln!(f, "vertex {v0}")?;
        writeln!(f, "vertex {v1}")?;
        writeln!(f, "vertex {v2}")?;
        writeln!(f, "endloop")?;
        writeln!(f, "endfacet")
    }
}

use crate::edge::Edge;
use crate::error::{GeometryError, Result};
use crate::face::Face;
use crate::voronoi::{ClassifiedRidge, VoronoiDiagram};
use std::collections::BTreeMap;

/// The cut-locus edge set restricted to one face: a map from the unordered
/// generating point pair to the surviving clipped edge.
///
/// Ridges whose clip against the face is empty are omitted, never inserted.
/// Iteration order is deterministic (sorted by point pair).
#[derive(Clone, Debug, Default)]
pub struct ClippedDiagram {
    edges: BTreeMap<(usize, usize), Edge>,
}

impl ClippedDiagram {
    pub fn new() -> Self {
        Self { edges: BTreeMap::new() }
    }

    fn key(i: usize, j: usize) -> (usize, usize) {
        if i <= j { (i, j) } else { (j, i) }
    }

    /// Inserts the clipped edge for a point pair. The same pair appearing
    /// twice violates the diagram's ridge-uniqueness invariant.
    pub(crate) fn insert(&mut self, i: usize, j: usize, edge: Edge) -> Result<()> {
        let key = Self::key(i, j);
        if self.edges.contains_key(&key) {
            return Err(GeometryError::DuplicateRidge { i: key.0, j: key.1 });
        }
        self.edges.insert(key, edge);
        Ok(())
    }

    /// Looks up the edge between two point indices, in either order.
    pub fn get(&self, i: usize, j: usize) -> Option<&Edge> {
        self.edges.get(&Self::key(i, j))
    }

    /// Number of surviving edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates the surviving edges in point-pair order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Edge)> {
        self.edges.iter().map(|(&pair, edge)| (pair, edge))
    }
}

/// Clips every classified ridge of a Voronoi diagram against one face,
/// producing the cut-locus edge set on that face.
pub struct BoundedDiagramBuilder<'a> {
    face: &'a Face,
}

impl<'a> BoundedDiagramBuilder<'a> {
    pub fn new(face: &'a Face) -> Self {
        Self { face }
    }

    /// Classifies the diagram's ridges, then clips each against the face.
    pub fn build(&self, diagram: &VoronoiDiagram) -> Result<ClippedDiagram> {
        let ridges = diagram.classify_ridges()?;
        self.build_from_ridges(&ridges)
    }

    /// Clips pre-classified ridges against the face. Public so that
    /// hand-constructed ridge sets can drive clipping without any backend.
    pub fn build_from_ridges(&self, ridges: &[ClassifiedRidge]) -> Result<ClippedDiagram> {
        let mut out = ClippedDiagram::new();
        for ridge in ridges {
            let clipped = match ridge.edge {
                Edge::Segment { a, b } => self.face.clip_segment(a, b),
                Edge::Ray { origin, direction } => self.face.clip_ray(origin, direction),
            };
            if let Some(edge) = clipped {
                out.insert(ridge.points.0, ridge.points.1, edge)?;
            }
        }
        Ok(out)
    }
}

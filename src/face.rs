use crate::bound::{point_at, Bound, Span, EPS};
use crate::edge::Edge;

/// Rendering and debug metadata attached to a bound. Never read by the
/// geometry routines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoundInfo {
    /// Display name of the face edge this bound came from.
    pub name: Option<String>,
    /// Line color hint for renderers.
    pub color: Option<String>,
}

/// The admissible region of one unfolded face image: an ordered, append-only
/// sequence of [`Bound`]s.
///
/// Insertion order traces the region's boundary consistently; bounds are
/// never reordered or shared after construction. Consecutive bounds'
/// boundary lines intersect in the derived vertex polygon.
#[derive(Clone, Debug, Default)]
pub struct Face {
    entries: Vec<(Bound, BoundInfo)>,
}

impl Face {
    /// Creates a face with no bounds (the full plane).
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Creates the axis-aligned box region `min <= p <= max`, with bounds
    /// ordered right, top, left, bottom so the derived vertices trace the
    /// boundary counter-clockwise.
    pub fn from_box(min: [f64; 2], max: [f64; 2]) -> Self {
        let mut face = Face::new();
        face.add_bound(Bound::new([1.0, 0.0], max[0]), BoundInfo::default());
        face.add_bound(Bound::new([0.0, 1.0], max[1]), BoundInfo::default());
        face.add_bound(Bound::new([-1.0, 0.0], -min[0]), BoundInfo::default());
        face.add_bound(Bound::new([0.0, -1.0], -min[1]), BoundInfo::default());
        face
    }

    /// Appends a bound. Bounds must be added in boundary order.
    pub fn add_bound(&mut self, bound: Bound, info: BoundInfo) {
        self.entries.push((bound, info));
    }

    /// Number of bounds in this face.
    pub fn count_bounds(&self) -> usize {
        self.entries.len()
    }

    /// The bounds and their metadata, in insertion order.
    pub fn bounds(&self) -> impl Iterator<Item = &(Bound, BoundInfo)> {
        self.entries.iter()
    }

    /// Checks whether a point satisfies every bound.
    pub fn contains(&self, point: [f64; 2]) -> bool {
        self.entries.iter().all(|(bound, _)| bound.contains(point))
    }

    /// Clips the segment `a..b` against every bound in turn.
    ///
    /// Returns `None` when the surviving parameter interval is empty or
    /// shorter than the tolerance; this is the expected "edge misses the
    /// face" signal, not an error.
    pub fn clip_segment(&self, a: [f64; 2], b: [f64; 2]) -> Option<Edge> {
        let dir = [b[0] - a[0], b[1] - a[1]];
        let mut span = Span::segment();
        for (bound, _) in &self.entries {
            span = bound.restrict(a, dir, span)?;
        }
        Some(Edge::Segment {
            a: point_at(a, dir, span.lo),
            b: point_at(a, dir, span.hi),
        })
    }

    /// Clips the ray `origin + t * direction, t >= 0` against every bound.
    ///
    /// If no bound limits the interval from above the result remains a ray
    /// anchored at the interval's lower endpoint; otherwise it collapses to
    /// a bounded segment.
    pub fn clip_ray(&self, origin: [f64; 2], direction: [f64; 2]) -> Option<Edge> {
        let mut span = Span::ray();
        for (bound, _) in &self.entries {
            span = bound.restrict(origin, direction, span)?;
        }
        if span.hi.is_finite() {
            Some(Edge::Segment {
                a: point_at(origin, direction, span.lo),
                b: point_at(origin, direction, span.hi),
            })
        } else {
            Some(Edge::Ray {
                origin: point_at(origin, direction, span.lo),
                direction,
            })
        }
    }

    /// Derives the polygon outline of the region by intersecting consecutive
    /// bounds' boundary lines in insertion order (wrapping at the end).
    ///
    /// Near-parallel consecutive lines contribute no vertex. For a bounded
    /// convex region the result is a simple closed polygon.
    pub fn vertices(&self) -> Vec<[f64; 2]> {
        let n = self.entries.len();
        if n < 2 {
            return Vec::new();
        }
        let mut verts = Vec::with_capacity(n);
        for i in 0..n {
            let (n1, c1) = self.entries[i].0.boundary_line();
            let (n2, c2) = self.entries[(i + 1) % n].0.boundary_line();
            let det = n1[0] * n2[1] - n1[1] * n2[0];
            if det.abs() < EPS {
                continue;
            }
            verts.push([
                (c1 * n2[1] - n1[1] * c2) / det,
                (n1[0] * c2 - c1 * n2[0]) / det,
            ]);
        }
        verts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_vertices_ccw() {
        let face = Face::from_box([-2.0, -2.0], [2.0, 2.0]);
        let verts = face.vertices();
        assert_eq!(verts.len(), 4);
        let expected = [[2.0, 2.0], [-2.0, 2.0], [-2.0, -2.0], [2.0, -2.0]];
        for (v, e) in verts.iter().zip(expected.iter()) {
            assert!((v[0] - e[0]).abs() < 1e-9 && (v[1] - e[1]).abs() < 1e-9,
                    "vertex {:?} != {:?}", v, e);
        }
    }

    #[test]
    fn test_contains_box() {
        let face = Face::from_box([0.0, 0.0], [1.0, 1.0]);
        assert!(face.contains([0.5, 0.5]));
        assert!(face.contains([1.0, 1.0]));
        assert!(!face.contains([1.5, 0.5]));
    }

    #[test]
    fn test_clip_segment_through_box() {
        let face = Face::from_box([0.0, 0.0], [1.0, 1.0]);
        let edge = face.clip_segment([-1.0, 0.5], [2.0, 0.5]).unwrap();
        match edge {
            Edge::Segment { a, b } => {
                assert!((a[0]).abs() < 1e-9);
                assert!((b[0] - 1.0).abs() < 1e-9);
            }
            Edge::Ray { .. } => panic!("expected a segment"),
        }
    }

    #[test]
    fn test_clip_segment_missing_box() {
        let face = Face::from_box([0.0, 0.0], [1.0, 1.0]);
        assert!(face.clip_segment([-1.0, 2.0], [2.0, 2.0]).is_none());
    }

    #[test]
    fn test_clip_ray_collapses_in_box() {
        let face = Face::from_box([0.0, 0.0], [1.0, 1.0]);
        let edge = face.clip_ray([0.5, 0.5], [1.0, 0.0]).unwrap();
        match edge {
            Edge::Segment { a, b } => {
                assert!((a[0] - 0.5).abs() < 1e-9);
                assert!((b[0] - 1.0).abs() < 1e-9);
            }
            Edge::Ray { .. } => panic!("box-bounded ray must collapse"),
        }
    }

    #[test]
    fn test_clip_ray_survives_half_plane() {
        // A single bound leaves the opposite direction unbounded.
        let mut face = Face::new();
        face.add_bound(Bound::new([1.0, 0.0], 2.0), BoundInfo::default());
        let edge = face.clip_ray([0.0, 0.0], [-1.0, 0.5]).unwrap();
        assert!(matches!(edge, Edge::Ray { .. }));
    }

    #[test]
    fn test_full_plane_face() {
        let face = Face::new();
        assert!(face.contains([1e6, -1e6]));
        assert!(matches!(face.clip_ray([0.0, 0.0], [1.0, 1.0]), Some(Edge::Ray { .. })));
        assert!(face.vertices().is_empty());
    }
}

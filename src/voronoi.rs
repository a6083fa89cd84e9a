use crate::edge::Edge;
use crate::error::{GeometryError, Result};
use delaunator::{triangulate, Point, EMPTY};

/// A planar Voronoi diagram over a set of source-image points.
///
/// The structure is backend-neutral: `vertices` holds the finite diagram
/// vertices, and each ridge pairs two generating point indices with up to two
/// vertex indices, `None` marking the vertex at infinity. Diagrams are
/// stateless values, rebuilt fresh per query.
#[derive(Clone, Debug, Default)]
pub struct VoronoiDiagram {
    /// Generating points, one per source image.
    pub points: Vec<[f64; 2]>,
    /// Finite diagram vertices.
    pub vertices: Vec<[f64; 2]>,
    /// Generating point index pair of each ridge.
    pub ridge_points: Vec<(usize, usize)>,
    /// Vertex index pair of each ridge; `None` is the vertex at infinity.
    pub ridge_vertices: Vec<[Option<usize>; 2]>,
    /// Marks a furthest-site diagram, which flips every ray's orientation.
    pub furthest_site: bool,
}

/// One ridge after classification: the generating point pair and its edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifiedRidge {
    /// Indices of the two source images this bisector separates.
    pub points: (usize, usize),
    /// The classified bisector piece.
    pub edge: Edge,
}

impl VoronoiDiagram {
    /// Mean of the generating points.
    pub fn centroid(&self) -> [f64; 2] {
        let n = self.points.len() as f64;
        let mut cx = 0.0;
        let mut cy = 0.0;
        for p in &self.points {
            cx += p[0];
            cy += p[1];
        }
        [cx / n, cy / n]
    }

    /// Classifies every ridge as a bounded segment or a semi-infinite ray.
    ///
    /// A ridge with two finite vertices becomes a [`Edge::Segment`]. A ridge
    /// with one finite vertex becomes a [`Edge::Ray`] anchored there; its
    /// direction is the unit normal of the tangent between the generating
    /// points, signed positive when it points away from the point-set
    /// centroid at the ridge midpoint, and negated for a furthest-site
    /// diagram. This orientation decides which side of the bisector is the
    /// nearer one.
    pub fn classify_ridges(&self) -> Result<Vec<ClassifiedRidge>> {
        let center = self.centroid();
        let mut out = Vec::with_capacity(self.ridge_points.len());
        for (r, &(i, j)) in self.ridge_points.iter().enumerate() {
            let edge = match self.ridge_vertices[r] {
                [Some(a), Some(b)] => Edge::Segment {
                    a: self.vertices[a],
                    b: self.vertices[b],
                },
                [Some(v), None] | [None, Some(v)] => {
                    let pi = self.points[i];
                    let pj = self.points[j];
                    let tx = pj[0] - pi[0];
                    let ty = pj[1] - pi[1];
                    let len = (tx * tx + ty * ty).sqrt();
                    let normal = [-ty / len, tx / len];
                    let mid = [(pi[0] + pj[0]) * 0.5, (pi[1] + pj[1]) * 0.5];
                    let side = (mid[0] - center[0]) * normal[0] + (mid[1] - center[1]) * normal[1];
                    let mut sign = if side > 0.0 { 1.0 } else { -1.0 };
                    if self.furthest_site {
                        sign = -sign;
                    }
                    Edge::Ray {
                        origin: self.vertices[v],
                        direction: [sign * normal[0], sign * normal[1]],
                    }
                }
                [None, None] => return Err(GeometryError::UnboundedRidge { i, j }),
            };
            out.push(ClassifiedRidge { points: (i, j), edge });
        }
        Ok(out)
    }
}

/// A pluggable Voronoi computation.
///
/// The engine only needs `compute`; injecting the backend keeps ridge
/// classification and clipping testable against hand-constructed diagrams,
/// independent of any numerical library.
pub trait VoronoiBackend {
    /// Computes the diagram of the given flat point list `[x0, y0, x1, y1, ..]`.
    fn compute(&self, points: &[f64]) -> Result<VoronoiDiagram>;
}

/// Front-end for planar Voronoi computation over an injected backend.
pub struct PlanarVoronoi<B: VoronoiBackend = DelaunayBackend> {
    backend: B,
}

impl PlanarVoronoi {
    /// Creates a front-end over the default Delaunay-dual backend.
    pub fn new() -> Self {
        Self { backend: DelaunayBackend }
    }
}

impl Default for PlanarVoronoi {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: VoronoiBackend> PlanarVoronoi<B> {
    /// Creates a front-end over a custom backend.
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Computes the diagram of the given flat point list.
    ///
    /// Fails with a [`GeometryError`] when the coordinate count is odd,
    /// fewer than 2 distinct points are given, exact duplicates occur, or
    /// the points are collinear so no diagram exists.
    pub fn compute(&self, points: &[f64]) -> Result<VoronoiDiagram> {
        self.backend.compute(points)
    }
}

/// The default backend: the Voronoi diagram as the dual of the Delaunay
/// triangulation. Voronoi vertices are triangle circumcenters, interior
/// Delaunay edges yield segment ridges between the two adjacent
/// circumcenters, and hull edges yield ridges with one vertex at infinity.
#[derive(Clone, Copy, Debug, Default)]
pub struct DelaunayBackend;

impl VoronoiBackend for DelaunayBackend {
    fn compute(&self, points: &[f64]) -> Result<VoronoiDiagram> {
        if points.len() % 2 != 0 {
            return Err(GeometryError::Dimension { count: points.len() });
        }
        let sites: Vec<[f64; 2]> = points.chunks(2).map(|c| [c[0], c[1]]).collect();

        let mut keys: Vec<(u64, u64)> = sites
            .iter()
            .map(|p| (p[0].to_bits(), p[1].to_bits()))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        if keys.len() < 2 {
            return Err(GeometryError::TooFewPoints { found: keys.len(), required: 2 });
        }
        if keys.len() < sites.len() {
            return Err(GeometryError::Degenerate { reason: "coincident points" });
        }

        let input: Vec<Point> = sites.iter().map(|p| Point { x: p[0], y: p[1] }).collect();
        let tri = triangulate(&input);
        if tri.triangles.is_empty() {
            return Err(GeometryError::Degenerate { reason: "collinear points admit no diagram" });
        }

        let tri_count = tri.triangles.len() / 3;
        let mut vertices = Vec::with_capacity(tri_count);
        for t in 0..tri_count {
            vertices.push(circumcenter(
                sites[tri.triangles[3 * t]],
                sites[tri.triangles[3 * t + 1]],
                sites[tri.triangles[3 * t + 2]],
            ));
        }

        // One ridge per undirected Delaunay edge. The twin halfedge's
        // triangle supplies the second circumcenter; hull edges have none.
        let mut ridge_points = Vec::new();
        let mut ridge_vertices = Vec::new();
        for e in 0..tri.triangles.len() {
            let twin = tri.halfedges[e];
            if twin != EMPTY && twin < e {
                continue;
            }
            ridge_points.push((tri.triangles[e], tri.triangles[next_halfedge(e)]));
            if twin == EMPTY {
                ridge_vertices.push([Some(e / 3), None]);
            } else {
                ridge_vertices.push([Some(e / 3), Some(twin / 3)]);
            }
        }

        Ok(VoronoiDiagram {
            points: sites,
            vertices,
            ridge_points,
            ridge_vertices,
            furthest_site: false,
        })
    }
}

fn next_halfedge(e: usize) -> usize {
    if e % 3 == 2 { e - 2 } else { e + 1 }
}

fn circumcenter(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> [f64; 2] {
    let d = 2.0 * (a[0] * (b[1] - c[1]) + b[0] * (c[1] - a[1]) + c[0] * (a[1] - b[1]));
    let a2 = a[0] * a[0] + a[1] * a[1];
    let b2 = b[0] * b[0] + b[1] * b[1];
    let c2 = c[0] * c[0] + c[1] * c[1];
    [
        (a2 * (b[1] - c[1]) + b2 * (c[1] - a[1]) + c2 * (a[1] - b[1])) / d,
        (a2 * (c[0] - b[0]) + b2 * (a[0] - c[0]) + c2 * (b[0] - a[0])) / d,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_odd_coordinates() {
        let vor = PlanarVoronoi::new();
        assert!(matches!(
            vor.compute(&[0.0, 0.0, 1.0]),
            Err(GeometryError::Dimension { count: 3 })
        ));
    }

    #[test]
    fn test_rejects_too_few_points() {
        let vor = PlanarVoronoi::new();
        assert!(matches!(
            vor.compute(&[0.5, 0.5]),
            Err(GeometryError::TooFewPoints { found: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_coincident_points() {
        let vor = PlanarVoronoi::new();
        let result = vor.compute(&[0.0, 0.0, 1.0, 1.0, 0.0, 0.0]);
        assert!(matches!(result, Err(GeometryError::Degenerate { .. })));
    }

    #[test]
    fn test_rejects_collinear_points() {
        let vor = PlanarVoronoi::new();
        let result = vor.compute(&[0.0, 0.0, 1.0, 0.0, 2.0, 0.0]);
        assert!(matches!(result, Err(GeometryError::Degenerate { .. })));
    }

    #[test]
    fn test_triangle_diagram() {
        // Three points: one Voronoi vertex (the circumcenter), three rays.
        let vor = PlanarVoronoi::new();
        let diagram = vor.compute(&[0.0, 0.0, 2.0, 0.0, 1.0, 2.0]).unwrap();
        assert_eq!(diagram.vertices.len(), 1);
        assert_eq!(diagram.ridge_points.len(), 3);

        let ridges = diagram.classify_ridges().unwrap();
        assert!(ridges.iter().all(|r| matches!(r.edge, Edge::Ray { .. })));

        // The circumcenter of (0,0), (2,0), (1,2) is (1, 3/4).
        let v = diagram.vertices[0];
        assert!((v[0] - 1.0).abs() < 1e-9 && (v[1] - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_classify_fake_diagram() {
        // Classification works on a hand-constructed diagram with no backend.
        let diagram = VoronoiDiagram {
            points: vec![[-1.0, 0.0], [1.0, 0.0], [0.0, 2.0]],
            vertices: vec![[0.0, 0.5]],
            ridge_points: vec![(0, 1)],
            ridge_vertices: vec![[Some(0), None]],
            furthest_site: false,
        };
        let ridges = diagram.classify_ridges().unwrap();
        assert_eq!(ridges.len(), 1);
        match ridges[0].edge {
            Edge::Ray { origin, direction } => {
                assert!((origin[0]).abs() < 1e-9 && (origin[1] - 0.5).abs() < 1e-9);
                // Tangent (1,0) gives normal (0,1); the midpoint (0,0) lies
                // below the centroid (0, 2/3), so the ray points down.
                assert!((direction[0]).abs() < 1e-9);
                assert!((direction[1] + 1.0).abs() < 1e-9);
            }
            Edge::Segment { .. } => panic!("one infinite vertex must classify as a ray"),
        }
    }

    #[test]
    fn test_unbounded_ridge_is_contract_violation() {
        let diagram = VoronoiDiagram {
            points: vec![[-1.0, 0.0], [1.0, 0.0]],
            vertices: vec![],
            ridge_points: vec![(0, 1)],
            ridge_vertices: vec![[None, None]],
            furthest_site: false,
        };
        assert!(matches!(
            diagram.classify_ridges(),
            Err(GeometryError::UnboundedRidge { i: 0, j: 1 })
        ));
    }
}

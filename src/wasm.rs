use crate::arcs::ArcSampler;
use crate::bound::{AffineMap, Bound};
use crate::edge::Edge;
use crate::face::{BoundInfo, Face};
use crate::locus::{BoundedDiagramBuilder, ClippedDiagram};
use crate::voronoi::{PlanarVoronoi, VoronoiDiagram};
use wasm_bindgen::prelude::*;

// --- Face ---

/// WASM wrapper for face regions.
#[wasm_bindgen(js_name = Face)]
pub struct FaceWASM {
    inner: Option<Face>,
}

#[wasm_bindgen(js_class = Face)]
impl FaceWASM {
    /// Creates a face with no bounds (the full plane).
    #[wasm_bindgen(constructor)]
    pub fn new() -> FaceWASM {
        FaceWASM { inner: Some(Face::new()) }
    }

    /// Creates the axis-aligned box region `min <= p <= max`.
    pub fn new_box(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> FaceWASM {
        FaceWASM { inner: Some(Face::from_box([min_x, min_y], [max_x, max_y])) }
    }

    /// Appends the half-plane bound `(mx, my) . p <= offset`.
    pub fn add_bound(&mut self, mx: f64, my: f64, offset: f64) {
        self.inner
            .as_mut()
            .unwrap()
            .add_bound(Bound::new([mx, my], offset), BoundInfo::default());
    }

    /// Appends a bound tested in an affine frame: the candidate point is
    /// mapped through `scale * [[t00, t01], [t10, t11]] * p + (sx, sy)`
    /// before the half-plane test.
    pub fn add_transformed_bound(
        &mut self,
        mx: f64,
        my: f64,
        offset: f64,
        scale: f64,
        t00: f64,
        t01: f64,
        t10: f64,
        t11: f64,
        sx: f64,
        sy: f64,
    ) {
        let map = AffineMap::new(scale, [[t00, t01], [t10, t11]], [sx, sy]);
        self.inner
            .as_mut()
            .unwrap()
            .add_bound(Bound::with_transform([mx, my], offset, map), BoundInfo::default());
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.inner.as_ref().unwrap().contains([x, y])
    }

    /// Derived polygon outline as a flat `[x, y, x, y, ..]` array.
    #[wasm_bindgen(getter)]
    pub fn vertices(&self) -> Vec<f64> {
        self.inner
            .as_ref()
            .unwrap()
            .vertices()
            .into_iter()
            .flat_map(|v| [v[0], v[1]])
            .collect()
    }

    #[wasm_bindgen(getter)]
    pub fn count_bounds(&self) -> usize {
        self.inner.as_ref().unwrap().count_bounds()
    }
}

impl FaceWASM {
    pub fn take_inner(&mut self) -> Option<Face> {
        self.inner.take()
    }
}

impl Default for FaceWASM {
    fn default() -> Self {
        Self::new()
    }
}

// --- Cut locus ---

/// WASM wrapper computing the cut-locus edge set of a source point's
/// unfolded images on one face.
#[wasm_bindgen(js_name = CutLocus)]
pub struct CutLocusWASM {
    sources: Vec<f64>,
    face: Face,
    furthest_site: bool,
    diagram: Option<VoronoiDiagram>,
    clipped: Option<ClippedDiagram>,
}

#[wasm_bindgen(js_class = CutLocus)]
impl CutLocusWASM {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CutLocusWASM {
        CutLocusWASM {
            sources: Vec::new(),
            face: Face::new(),
            furthest_site: false,
            diagram: None,
            clipped: None,
        }
    }

    /// Sets the unfolded source-image points as a flat `[x, y, ..]` array.
    pub fn set_sources(&mut self, points: &[f64]) {
        self.sources = points.to_vec();
        self.diagram = None;
        self.clipped = None;
    }

    /// Sets the face region the diagram is clipped against.
    pub fn set_face(&mut self, mut face: FaceWASM) {
        if let Some(f) = face.take_inner() {
            self.face = f;
        }
        self.diagram = None;
        self.clipped = None;
    }

    /// Flips every ray's orientation, as for a furthest-site diagram.
    pub fn set_furthest_site(&mut self, furthest: bool) {
        self.furthest_site = furthest;
        self.clipped = None;
    }

    /// Computes the diagram and clips it against the face.
    pub fn compute(&mut self) -> Result<(), JsValue> {
        let mut diagram = PlanarVoronoi::new()
            .compute(&self.sources)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        diagram.furthest_site = self.furthest_site;
        let clipped = BoundedDiagramBuilder::new(&self.face)
            .build(&diagram)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.diagram = Some(diagram);
        self.clipped = Some(clipped);
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn count_edges(&self) -> usize {
        self.clipped.as_ref().map_or(0, |c| c.len())
    }

    /// Surviving segments as a flat `[ax, ay, bx, by, ..]` array.
    #[wasm_bindgen(getter)]
    pub fn segments(&self) -> Vec<f64> {
        let mut out = Vec::new();
        if let Some(clipped) = &self.clipped {
            for (_, edge) in clipped.iter() {
                if let Edge::Segment { a, b } = *edge {
                    out.extend_from_slice(&[a[0], a[1], b[0], b[1]]);
                }
            }
        }
        out
    }

    /// Generating point pairs of the segments, matching `segments` order.
    #[wasm_bindgen(getter)]
    pub fn segment_pairs(&self) -> Vec<u32> {
        let mut out = Vec::new();
        if let Some(clipped) = &self.clipped {
            for ((i, j), edge) in clipped.iter() {
                if matches!(edge, Edge::Segment { .. }) {
                    out.extend_from_slice(&[i as u32, j as u32]);
                }
            }
        }
        out
    }

    /// Surviving rays as a flat `[ox, oy, dx, dy, ..]` array.
    #[wasm_bindgen(getter)]
    pub fn rays(&self) -> Vec<f64> {
        let mut out = Vec::new();
        if let Some(clipped) = &self.clipped {
            for (_, edge) in clipped.iter() {
                if let Edge::Ray { origin, direction } = *edge {
                    out.extend_from_slice(&[origin[0], origin[1], direction[0], direction[1]]);
                }
            }
        }
        out
    }

    /// Generating point pairs of the rays, matching `rays` order.
    #[wasm_bindgen(getter)]
    pub fn ray_pairs(&self) -> Vec<u32> {
        let mut out = Vec::new();
        if let Some(clipped) = &self.clipped {
            for ((i, j), edge) in clipped.iter() {
                if matches!(edge, Edge::Ray { .. }) {
                    out.extend_from_slice(&[i as u32, j as u32]);
                }
            }
        }
        out
    }

    /// Finite Voronoi vertices of the last computed diagram.
    #[wasm_bindgen(getter)]
    pub fn vertices(&self) -> Vec<f64> {
        self.diagram
            .as_ref()
            .map_or_else(Vec::new, |d| d.vertices.iter().flat_map(|v| [v[0], v[1]]).collect())
    }

    /// Samples admissible arcs around `(sx, sy)` for each radius, returned
    /// as flat `[radius, start_angle, end_angle, ..]` triples.
    pub fn sample_arcs(&self, sx: f64, sy: f64, radii: &[f64]) -> Vec<f64> {
        let sampler = ArcSampler::new();
        let mut out = Vec::new();
        for (radius, arcs) in sampler.sample([sx, sy], radii, &self.face) {
            for arc in arcs {
                out.extend_from_slice(&[radius, arc.start, arc.end]);
            }
        }
        out
    }
}

impl Default for CutLocusWASM {
    fn default() -> Self {
        Self::new()
    }
}

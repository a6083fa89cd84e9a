use crate::edge::Edge;

/// Tolerance for containment tests and for discarding near-empty intervals.
pub(crate) const EPS: f64 = 1e-9;

/// An affine pre-transform `p -> scale * (linear * p) + shift` applied to a
/// candidate point before a bound's half-plane test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineMap {
    /// Uniform scale factor.
    pub scale: f64,
    /// Row-major 2x2 linear map.
    pub linear: [[f64; 2]; 2],
    /// Translation applied after scaling.
    pub shift: [f64; 2],
}

impl AffineMap {
    pub fn new(scale: f64, linear: [[f64; 2]; 2], shift: [f64; 2]) -> Self {
        Self { scale, linear, shift }
    }

    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            linear: [[1.0, 0.0], [0.0, 1.0]],
            shift: [0.0, 0.0],
        }
    }

    /// Applies the transform to a point.
    pub fn apply(&self, p: [f64; 2]) -> [f64; 2] {
        let qx = self.linear[0][0] * p[0] + self.linear[0][1] * p[1];
        let qy = self.linear[1][0] * p[0] + self.linear[1][1] * p[1];
        [self.scale * qx + self.shift[0], self.scale * qy + self.shift[1]]
    }
}

/// Feasible parameter interval along a line `p(t) = origin + t * dir`.
///
/// `hi` is `f64::INFINITY` for a ray domain that no bound has limited yet.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Span {
    pub lo: f64,
    pub hi: f64,
}

impl Span {
    pub fn segment() -> Self {
        Span { lo: 0.0, hi: 1.0 }
    }

    pub fn ray() -> Self {
        Span { lo: 0.0, hi: f64::INFINITY }
    }
}

/// One admissible half-plane constraint of a face's region.
///
/// A point `p` is admissible when `m . transform(p) <= b`, where the optional
/// affine pre-transform lets one constraint definition serve every unfolded
/// image of the same physical face edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Bound {
    /// Normal vector `m` of the half-plane test.
    pub normal: [f64; 2],
    /// Scalar offset `b` of the half-plane test.
    pub offset: f64,
    /// Optional affine pre-transform applied before the test.
    pub transform: Option<AffineMap>,
}

impl Bound {
    /// Creates an untransformed half-plane `m . p <= b`.
    pub fn new(normal: [f64; 2], offset: f64) -> Self {
        Self { normal, offset, transform: None }
    }

    /// Creates a half-plane tested in the transformed frame `m . T(p) <= b`.
    pub fn with_transform(normal: [f64; 2], offset: f64, transform: AffineMap) -> Self {
        Self { normal, offset, transform: Some(transform) }
    }

    fn eval(&self, p: [f64; 2]) -> f64 {
        let q = match &self.transform {
            Some(map) => map.apply(p),
            None => p,
        };
        self.normal[0] * q[0] + self.normal[1] * q[1]
    }

    /// Checks whether a point satisfies this constraint.
    pub fn contains(&self, point: [f64; 2]) -> bool {
        self.eval(point) <= self.offset + EPS
    }

    /// Restricts a feasible interval along `p(t) = origin + t * dir` to the
    /// part satisfying this constraint.
    ///
    /// The constraint value is affine in `t` (the pre-transform is affine),
    /// so evaluating at `t = 0` and `t = 1` recovers the line coefficients.
    /// The interval can shrink or vanish, never grow. Intervals shorter than
    /// the tolerance count as empty.
    pub(crate) fn restrict(&self, origin: [f64; 2], dir: [f64; 2], span: Span) -> Option<Span> {
        let c0 = self.eval(origin);
        let c1 = self.eval([origin[0] + dir[0], origin[1] + dir[1]]) - c0;

        if c1.abs() <= EPS {
            // Parallel to the boundary line: feasible everywhere or nowhere.
            return if c0 <= self.offset + EPS { Some(span) } else { None };
        }

        let t = (self.offset - c0) / c1;
        let out = if c1 > 0.0 {
            Span { lo: span.lo, hi: span.hi.min(t) }
        } else {
            Span { lo: span.lo.max(t), hi: span.hi }
        };
        if out.hi - out.lo < EPS { None } else { Some(out) }
    }

    /// Clips the segment `a..b` against this single constraint.
    pub fn clip_segment(&self, a: [f64; 2], b: [f64; 2]) -> Option<Edge> {
        let dir = [b[0] - a[0], b[1] - a[1]];
        let span = self.restrict(a, dir, Span::segment())?;
        Some(Edge::Segment {
            a: point_at(a, dir, span.lo),
            b: point_at(a, dir, span.hi),
        })
    }

    /// Clips the ray `origin + t * direction, t >= 0` against this single
    /// constraint. Returns a segment when the constraint limits the ray from
    /// above, otherwise a (possibly re-anchored) ray.
    pub fn clip_ray(&self, origin: [f64; 2], direction: [f64; 2]) -> Option<Edge> {
        let span = self.restrict(origin, direction, Span::ray())?;
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

    /// The boundary line of this constraint in untransformed coordinates, as
    /// `(n, c)` with `n . p = c`. For a transformed bound this is the affine
    /// preimage of `m . q = b`.
    pub(crate) fn boundary_line(&self) -> ([f64; 2], f64) {
        match &self.transform {
            None => (self.normal, self.offset),
            Some(map) => {
                let m = self.normal;
                let n = [
                    map.scale * (map.linear[0][0] * m[0] + map.linear[1][0] * m[1]),
                    map.scale * (map.linear[0][1] * m[0] + map.linear[1][1] * m[1]),
                ];
                let c = self.offset - (m[0] * map.shift[0] + m[1] * map.shift[1]);
                (n, c)
            }
        }
    }
}

pub(crate) fn point_at(origin: [f64; 2], dir: [f64; 2], t: f64) -> [f64; 2] {
    [origin[0] + t * dir[0], origin[1] + t * dir[1]]
}

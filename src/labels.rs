/// Anchor points already placed during one rendering pass.
///
/// A session lives for a single plot invocation: create it (or `clear` it)
/// per figure and discard it afterwards. It is never persisted.
#[derive(Clone, Debug, Default)]
pub struct LabelSession {
    placed: Vec<[f64; 2]>,
}

impl LabelSession {
    pub fn new() -> Self {
        Self { placed: Vec::new() }
    }

    /// The anchors placed so far, in placement order.
    pub fn placed(&self) -> &[[f64; 2]] {
        &self.placed
    }

    /// Resets the session for the next plot.
    pub fn clear(&mut self) {
        self.placed.clear();
    }
}

/// Chooses non-overlapping anchor points for edge labels.
///
/// Candidates step away from the anchor along the positive and negative
/// tangent at geometrically increasing distances. The first candidate
/// farther than `separation` from every already-placed anchor wins; when
/// none qualifies the candidate maximizing the minimum distance is taken
/// (greedy approximate max-min). Results are deterministic for a given
/// anchor, tangent, and session state.
#[derive(Clone, Copy, Debug)]
pub struct LabelPlacer {
    /// Distance of the nearest candidate from the anchor.
    pub base_distance: f64,
    /// Geometric growth factor between candidate distances.
    pub growth: f64,
    /// Number of candidates generated.
    pub candidates: usize,
    /// Minimum distance kept between placed labels.
    pub separation: f64,
}

impl Default for LabelPlacer {
    fn default() -> Self {
        // base_distance matches the line_label_dist rendering default.
        Self { base_distance: 0.3, growth: 1.5, candidates: 20, separation: 1.5 }
    }
}

impl LabelPlacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places one label near `anchor`, records it in the session, and
    /// returns the chosen point. `tangent` must be a unit vector.
    pub fn place(&self, anchor: [f64; 2], tangent: [f64; 2], session: &mut LabelSession) -> [f64; 2] {
        let mut candidates = Vec::with_capacity(self.candidates);
        let mut dist = self.base_distance;
        while candidates.len() < self.candidates {
            candidates.push([anchor[0] + dist * tangent[0], anchor[1] + dist * tangent[1]]);
            if candidates.len() < self.candidates {
                candidates.push([anchor[0] - dist * tangent[0], anchor[1] - dist * tangent[1]]);
            }
            dist *= self.growth;
        }

        for &candidate in &candidates {
            if self.min_distance(candidate, session) > self.separation {
                session.placed.push(candidate);
                return candidate;
            }
        }

        // Max-min fallback; strict improvement keeps the earliest candidate
        // on ties.
        let mut best = candidates[0];
        let mut best_min = self.min_distance(best, session);
        for &candidate in &candidates[1..] {
            let m = self.min_distance(candidate, session);
            if m > best_min {
                best_min = m;
                best = candidate;
            }
        }
        session.placed.push(best);
        best
    }

    fn min_distance(&self, candidate: [f64; 2], session: &LabelSession) -> f64 {
        session
            .placed
            .iter()
            .map(|p| {
                let dx = candidate[0] - p[0];
                let dy = candidate[1] - p[1];
                (dx * dx + dy * dy).sqrt()
            })
            .fold(f64::INFINITY, f64::min)
    }
}

/// Flips a tangent so it points into the `(1, 1)` half-plane.
///
/// This keeps label offsets on a consistent side of their edges across one
/// figure. It is a purely aesthetic convention for label placement and has
/// no role in ridge classification.
pub fn orient_label_tangent(tangent: [f64; 2]) -> [f64; 2] {
    if tangent[0] + tangent[1] >= 0.0 {
        tangent
    } else {
        [-tangent[0], -tangent[1]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(a: [f64; 2], b: [f64; 2]) -> f64 {
        ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
    }

    #[test]
    fn test_first_label_sits_at_base_distance() {
        let placer = LabelPlacer::new();
        let mut session = LabelSession::new();
        let p = placer.place([0.0, 0.0], [1.0, 0.0], &mut session);
        assert!((dist(p, [0.3, 0.0])).abs() < 1e-12);
        assert_eq!(session.placed().len(), 1);
    }

    #[test]
    fn test_repeat_placements_separate() {
        let placer = LabelPlacer::new();
        let mut session = LabelSession::new();
        let first = placer.place([0.0, 0.0], [1.0, 0.0], &mut session);
        let second = placer.place([0.0, 0.0], [1.0, 0.0], &mut session);
        assert!(dist(first, second) > placer.separation,
                "labels {:?} and {:?} overlap", first, second);
    }

    #[test]
    fn test_determinism() {
        let placer = LabelPlacer::new();
        let mut s1 = LabelSession::new();
        let mut s2 = LabelSession::new();
        for _ in 0..5 {
            let a = placer.place([1.0, 2.0], [0.0, 1.0], &mut s1);
            let b = placer.place([1.0, 2.0], [0.0, 1.0], &mut s2);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_clear_resets_session() {
        let placer = LabelPlacer::new();
        let mut session = LabelSession::new();
        let first = placer.place([0.0, 0.0], [1.0, 0.0], &mut session);
        session.clear();
        let again = placer.place([0.0, 0.0], [1.0, 0.0], &mut session);
        assert_eq!(first, again);
    }

    #[test]
    fn test_orient_label_tangent() {
        assert_eq!(orient_label_tangent([1.0, 0.0]), [1.0, 0.0]);
        assert_eq!(orient_label_tangent([-1.0, 0.0]), [1.0, 0.0]);
        assert_eq!(orient_label_tangent([-0.6, 0.8]), [-0.6, 0.8]);
    }
}

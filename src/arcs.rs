use crate::face::Face;
use std::f64::consts::TAU;

/// A circular arc: the part of the circle around `center` with the given
/// `radius` spanning angles `start..=end`.
///
/// `start` lies in `[0, 2π)`; `end >= start` and may exceed `2π` when the
/// arc crosses angle zero. A full circle is `start = 0, end = 2π`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub center: [f64; 2],
    pub radius: f64,
    pub start: f64,
    pub end: f64,
}

impl Arc {
    /// The point on the arc's circle at the given angle.
    pub fn point_at(&self, angle: f64) -> [f64; 2] {
        [
            self.center[0] + self.radius * angle.cos(),
            self.center[1] + self.radius * angle.sin(),
        ]
    }

    /// Angular extent of the arc.
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }
}

/// Approximates the cut-locus boundary by intersecting growing-radius
/// circles around the source with a face's admissible region.
///
/// For each radius the full circle is tested for membership against every
/// bound at `resolution` equally spaced angles, and maximal admissible runs
/// are merged into arcs. This deliberately approximate method complements
/// the exact bisector boundary: it cross-checks it visually and produces the
/// dense colored-ring renderings the exact edges alone cannot convey.
#[derive(Clone, Copy, Debug)]
pub struct ArcSampler {
    resolution: usize,
}

impl ArcSampler {
    /// Default number of membership samples per circle.
    pub const DEFAULT_RESOLUTION: usize = 720;

    pub fn new() -> Self {
        Self { resolution: Self::DEFAULT_RESOLUTION }
    }

    /// Creates a sampler testing `resolution` angles per circle.
    pub fn with_resolution(resolution: usize) -> Self {
        Self { resolution }
    }

    /// Samples one circle per radius, preserving the caller's radius order.
    /// Radii are expected to be increasing.
    pub fn sample(&self, source: [f64; 2], radii: &[f64], face: &Face) -> Vec<(f64, Vec<Arc>)> {
        radii
            .iter()
            .map(|&radius| (radius, self.sample_circle(source, radius, face)))
            .collect()
    }

    /// Intersects a single circle with the face's admissible region.
    pub fn sample_circle(&self, source: [f64; 2], radius: f64, face: &Face) -> Vec<Arc> {
        let n = self.resolution;
        let step = TAU / n as f64;
        let inside: Vec<bool> = (0..n)
            .map(|k| {
                let angle = k as f64 * step;
                face.contains([
                    source[0] + radius * angle.cos(),
                    source[1] + radius * angle.sin(),
                ])
            })
            .collect();

        if inside.iter().all(|&b| b) {
            return vec![Arc { center: source, radius, start: 0.0, end: TAU }];
        }

        // Each maximal run of admissible samples becomes one arc; runs that
        // cross angle zero keep their start below 2π and extend past it.
        let mut arcs = Vec::new();
        for k in 0..n {
            let prev = (k + n - 1) % n;
            if inside[k] && !inside[prev] {
                let mut len = 1;
                while inside[(k + len) % n] {
                    len += 1;
                }
                arcs.push(Arc {
                    center: source,
                    radius,
                    start: k as f64 * step,
                    end: (k + len - 1) as f64 * step,
                });
            }
        }
        arcs
    }
}

impl Default for ArcSampler {
    fn default() -> Self {
        Self::new()
    }
}

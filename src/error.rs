use thiserror::Error;

/// Result type alias using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Errors that can occur while building or clipping a cut-locus diagram.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// The flat coordinate list does not describe 2-D points.
    #[error("point list is not 2-D ({count} coordinates is not a multiple of 2)")]
    Dimension {
        /// Number of coordinates supplied.
        count: usize,
    },

    /// Not enough distinct points to build a diagram.
    #[error("need at least {required} distinct points, got {found}")]
    TooFewPoints {
        /// Number of distinct points supplied.
        found: usize,
        /// Minimum number of distinct points.
        required: usize,
    },

    /// The point configuration admits no Voronoi diagram.
    #[error("degenerate point configuration: {reason}")]
    Degenerate {
        /// Description of the degeneracy.
        reason: &'static str,
    },

    /// A ridge with no finite vertex reached classification.
    #[error("ridge between points {i} and {j} has no finite vertex")]
    UnboundedRidge {
        /// First generating point index.
        i: usize,
        /// Second generating point index.
        j: usize,
    },

    /// The same point pair was clipped into the diagram twice.
    #[error("duplicate ridge for point pair ({i}, {j})")]
    DuplicateRidge {
        /// Smaller point index of the normalized pair.
        i: usize,
        /// Larger point index of the normalized pair.
        j: usize,
    },
}

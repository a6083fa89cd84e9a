//! # vorofold
//!
//! `vorofold` is a Rust library for computing the cut locus of a point source on a convex
//! polyhedron's surface, designed to be used in Rust as well as compiled to WebAssembly
//! (WASM). It works in the plane of one unfolded face: the Voronoi diagram of the unfolded
//! source images is classified into bisector segments and rays, then clipped to the face's
//! admissible region.
//!
//! ## Features
//!
//! - **WASM-first**: Built with `wasm-bindgen` for seamless integration with JavaScript and TypeScript.
//! - **Pluggable Voronoi backend**: Diagrams come from an injected [`VoronoiBackend`]; the default
//!   computes the Delaunay dual via `delaunator`.
//! - **Region clipping**: Faces clip segments and rays against ordered half-plane bounds,
//!   with optional affine pre-transforms for unfolded image frames.
//! - **Arc sampling**: Growing-radius circles intersected with a face approximate the same
//!   boundary for dense ring renderings.
//!
//! ## Example
//!
//! See the `demos/` directory for usage with SVG plotting and JSON export.
//!
//! ## Main Interface
//!
//! The primary entry points are [`PlanarVoronoi`], which computes the diagram, and
//! [`BoundedDiagramBuilder`], which clips it against a [`Face`].

mod arcs;
mod bound;
mod edge;
mod error;
mod face;
mod labels;
mod locus;
mod plot;
mod voronoi;
pub mod wasm;

pub use arcs::Arc;
pub use arcs::ArcSampler;
pub use bound::AffineMap;
pub use bound::Bound;
pub use edge::Edge;
pub use error::GeometryError;
pub use error::Result;
pub use face::BoundInfo;
pub use face::Face;
pub use labels::orient_label_tangent;
pub use labels::LabelPlacer;
pub use labels::LabelSession;
pub use locus::BoundedDiagramBuilder;
pub use locus::ClippedDiagram;
pub use plot::PlotOptions;
pub use voronoi::ClassifiedRidge;
pub use voronoi::DelaunayBackend;
pub use voronoi::PlanarVoronoi;
pub use voronoi::VoronoiBackend;
pub use voronoi::VoronoiDiagram;

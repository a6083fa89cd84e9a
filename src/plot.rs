/// Rendering configuration recognized by cut-locus renderers.
///
/// The engine computes geometry only; these options are passed through to
/// whatever draws it. Each field replaces one of the loosely-typed keyword
/// options a plotting call would otherwise take.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotOptions {
    /// Draw the source-image points.
    pub show_points: bool,
    /// Draw the Voronoi diagram vertices.
    pub show_vertices: bool,
    /// Line color for diagram edges.
    pub line_colors: String,
    /// Line width for diagram edges.
    pub line_width: f64,
    /// Line alpha for diagram edges.
    pub line_alpha: f64,
    /// Distance from an edge at which its label is anchored.
    pub line_label_dist: f64,
    /// Display names for the source-image points, by index.
    pub point_names: Vec<String>,
    /// Annotate edges with their generating point pair.
    pub label_lines: bool,
    /// Marker size for source-image points.
    pub point_size: Option<f64>,
    /// Treat the diagram as furthest-site, flipping every ray's orientation.
    pub furthest_site: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            show_points: true,
            show_vertices: true,
            line_colors: "black".to_string(),
            line_width: 1.0,
            line_alpha: 1.0,
            line_label_dist: 0.3,
            point_names: Vec::new(),
            label_lines: false,
            point_size: None,
            furthest_site: false,
        }
    }
}

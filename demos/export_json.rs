use serde::Serialize;
use vorofold::{ArcSampler, BoundedDiagramBuilder, Edge, Face, PlanarVoronoi};

#[derive(Serialize)]
struct EdgeRecord {
    pair: (usize, usize),
    kind: &'static str,
    a: [f64; 2],
    b: [f64; 2],
}

#[derive(Serialize)]
struct ArcRecord {
    radius: f64,
    start: f64,
    end: f64,
}

#[derive(Serialize)]
struct Export {
    points: Vec<[f64; 2]>,
    face_vertices: Vec<[f64; 2]>,
    edges: Vec<EdgeRecord>,
    arcs: Vec<ArcRecord>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let points = vec![0.0, 0.0, -1.0, -1.0, -1.0, 1.0, 1.0, -1.0, 1.0, 1.0];
    let face = Face::from_box([-2.0, -2.0], [2.0, 2.0]);

    let diagram = PlanarVoronoi::new().compute(&points)?;
    let clipped = BoundedDiagramBuilder::new(&face).build(&diagram)?;

    let edges = clipped
        .iter()
        .map(|(pair, edge)| match *edge {
            Edge::Segment { a, b } => EdgeRecord { pair, kind: "segment", a, b },
            Edge::Ray { origin, direction } => EdgeRecord {
                pair,
                kind: "ray",
                a: origin,
                b: direction,
            },
        })
        .collect();

    let radii: Vec<f64> = (1..=8).map(|k| k as f64 * 0.25).collect();
    let mut arcs = Vec::new();
    for (radius, ring) in ArcSampler::new().sample([0.0, 0.0], &radii, &face) {
        for arc in ring {
            arcs.push(ArcRecord { radius, start: arc.start, end: arc.end });
        }
    }

    let export = Export {
        points: points.chunks(2).map(|c| [c[0], c[1]]).collect(),
        face_vertices: face.vertices(),
        edges,
        arcs,
    };

    let json = serde_json::to_string_pretty(&export)?;
    std::fs::write("cut_locus.json", &json)?;
    println!("Output saved to cut_locus.json");
    Ok(())
}

use plotters::prelude::*;
use vorofold::{
    orient_label_tangent, ArcSampler, BoundedDiagramBuilder, Edge, Face, LabelPlacer,
    LabelSession, PlanarVoronoi, PlotOptions,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A source at the origin with four unfolded images on the square corners,
    // restricted to the face |x| <= 2, |y| <= 2.
    let points = vec![0.0, 0.0, -1.0, -1.0, -1.0, 1.0, 1.0, -1.0, 1.0, 1.0];
    let face = Face::from_box([-2.0, -2.0], [2.0, 2.0]);

    let options = PlotOptions {
        label_lines: true,
        point_names: vec!["s".into(), "s1".into(), "s2".into(), "s3".into(), "s4".into()],
        ..PlotOptions::default()
    };

    run_example("cut_locus.svg", &points, &face, &options)?;

    let furthest = PlotOptions { furthest_site: true, ..options };
    run_example("cut_locus_furthest.svg", &points, &face, &furthest)?;

    Ok(())
}

fn run_example(
    filename: &str,
    points: &[f64],
    face: &Face,
    options: &PlotOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut diagram = PlanarVoronoi::new().compute(points)?;
    diagram.furthest_site = options.furthest_site;
    let clipped = BoundedDiagramBuilder::new(face).build(&diagram)?;

    let radii: Vec<f64> = (1..=12).map(|k| k as f64 * 0.25).collect();
    let rings = ArcSampler::new().sample([points[0], points[1]], &radii, face);

    let root = SVGBackend::new(filename, (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root).build_cartesian_2d(-3.0..3.0, -3.0..3.0)?;

    // Face outline
    let mut outline: Vec<(f64, f64)> = face.vertices().iter().map(|v| (v[0], v[1])).collect();
    if let Some(&first) = outline.first() {
        outline.push(first);
    }
    chart.draw_series(std::iter::once(PathElement::new(outline, BLACK.stroke_width(2))))?;

    // Distance rings
    let max_radius = *radii.last().unwrap();
    for (radius, arcs) in &rings {
        let shade = BLUE.mix(0.6 * (1.0 - radius / (max_radius * 1.2)));
        for arc in arcs {
            let steps = (arc.sweep() * 64.0).ceil().max(2.0) as usize;
            let poly: Vec<(f64, f64)> = (0..=steps)
                .map(|k| {
                    let angle = arc.start + arc.sweep() * k as f64 / steps as f64;
                    let p = arc.point_at(angle);
                    (p[0], p[1])
                })
                .collect();
            chart.draw_series(std::iter::once(PathElement::new(poly, shade)))?;
        }
    }

    // Cut-locus edges
    let style = line_color(&options.line_colors)
        .mix(options.line_alpha)
        .stroke_width(options.line_width as u32);
    let placer = LabelPlacer::new();
    let mut session = LabelSession::new();
    for ((i, j), edge) in clipped.iter() {
        let poly = match *edge {
            Edge::Segment { a, b } => vec![(a[0], a[1]), (b[0], b[1])],
            Edge::Ray { origin, direction } => {
                // Draw a surviving ray out to the chart border.
                let far = [origin[0] + 10.0 * direction[0], origin[1] + 10.0 * direction[1]];
                vec![(origin[0], origin[1]), (far[0], far[1])]
            }
        };
        chart.draw_series(std::iter::once(PathElement::new(poly, style.clone())))?;

        if options.label_lines {
            let anchor = edge.anchor();
            let tangent = orient_label_tangent(edge.tangent());
            let at = placer.place(anchor, tangent, &mut session);
            chart.draw_series(std::iter::once(Text::new(
                format!("{}|{}", i, j),
                (at[0], at[1]),
                ("sans-serif", 14),
            )))?;
        }
    }

    // Source images
    if options.show_points {
        let size = options.point_size.unwrap_or(3.0) as i32;
        for (k, p) in points.chunks(2).enumerate() {
            chart.draw_series(std::iter::once(Circle::new((p[0], p[1]), size, RED.filled())))?;
            if let Some(name) = options.point_names.get(k) {
                chart.draw_series(std::iter::once(Text::new(
                    name.clone(),
                    (p[0] + 0.05, p[1] + 0.05),
                    ("sans-serif", 14),
                )))?;
            }
        }
    }

    // Diagram vertices
    if options.show_vertices {
        for v in &diagram.vertices {
            chart.draw_series(std::iter::once(Circle::new((v[0], v[1]), 2, GREEN.filled())))?;
        }
    }

    root.present()?;
    println!("Output saved to {}", filename);
    Ok(())
}

fn line_color(name: &str) -> RGBColor {
    match name {
        "red" => RED,
        "green" => GREEN,
        "blue" => BLUE,
        _ => BLACK,
    }
}

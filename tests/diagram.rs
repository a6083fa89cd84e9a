use vorofold::{BoundedDiagramBuilder, Edge, Face, PlanarVoronoi};

#[test]
fn test_center_and_corners_diagram() {
    // Source images: the origin plus the four unit-square corners.
    let points = vec![0.0, 0.0, -1.0, -1.0, -1.0, 1.0, 1.0, -1.0, 1.0, 1.0];
    let diagram = PlanarVoronoi::new().compute(&points).unwrap();

    // The origin's cell is the square (+-1, 0), (0, +-1): four finite
    // vertices, four center-corner ridges, four corner-corner hull ridges.
    assert_eq!(diagram.vertices.len(), 4);
    assert_eq!(diagram.ridge_points.len(), 8);
    for v in &diagram.vertices {
        let r = (v[0] * v[0] + v[1] * v[1]).sqrt();
        assert!((r - 1.0).abs() < 1e-9, "diagram vertex {:?} off the unit axes", v);
    }

    let ridges = diagram.classify_ridges().unwrap();
    let mut segments = 0;
    let mut rays = 0;
    for ridge in &ridges {
        let (i, j) = ridge.points;
        match ridge.edge {
            Edge::Segment { a, b } => {
                segments += 1;
                assert!(i == 0 || j == 0, "finite ridge ({}, {}) should touch the center", i, j);
                let len = ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt();
                assert!((len - 2f64.sqrt()).abs() < 1e-9, "square side length, got {}", len);
            }
            Edge::Ray { origin, direction } => {
                rays += 1;
                assert!(i != 0 && j != 0, "hull ridge ({}, {}) should join two corners", i, j);
                // Each hull ray starts on a unit axis vertex and continues
                // outward along that axis, away from the origin.
                assert!((origin[0] - direction[0]).abs() < 1e-9);
                assert!((origin[1] - direction[1]).abs() < 1e-9);
                let norm = (direction[0] * direction[0] + direction[1] * direction[1]).sqrt();
                assert!((norm - 1.0).abs() < 1e-9, "ray direction must be unit length");
            }
        }
    }
    assert_eq!(segments, 4);
    assert_eq!(rays, 4);
}

#[test]
fn test_center_and_corners_rays_by_pair() {
    let points = vec![0.0, 0.0, -1.0, -1.0, -1.0, 1.0, 1.0, -1.0, 1.0, 1.0];
    let diagram = PlanarVoronoi::new().compute(&points).unwrap();
    let ridges = diagram.classify_ridges().unwrap();

    // Corner pair -> expected outward axis direction.
    let expected = [
        ((1, 2), [-1.0, 0.0]),
        ((1, 3), [0.0, -1.0]),
        ((2, 4), [0.0, 1.0]),
        ((3, 4), [1.0, 0.0]),
    ];
    for (pair, direction) in expected {
        let ridge = ridges
            .iter()
            .find(|r| {
                let (i, j) = r.points;
                (i.min(j), i.max(j)) == pair
            })
            .expect("hull ridge missing");
        match ridge.edge {
            Edge::Ray { direction: d, .. } => {
                assert!(
                    (d[0] - direction[0]).abs() < 1e-9 && (d[1] - direction[1]).abs() < 1e-9,
                    "ray for pair {:?} points {:?}, expected {:?}", pair, d, direction
                );
            }
            Edge::Segment { .. } => panic!("hull ridge {:?} must be a ray", pair),
        }
    }
}

#[test]
fn test_clipped_keys_subset_of_ridge_pairs() {
    // A scatter in general position; every clipped pair must come from an
    // actual ridge, never be invented by the builder.
    let points = vec![
        0.1, 0.2, 3.0, 0.7, 1.4, 2.9, -2.2, 1.3, -0.8, -2.4, 2.6, -1.7, -3.1, -0.4,
    ];
    let diagram = PlanarVoronoi::new().compute(&points).unwrap();
    let face = Face::from_box([-1.5, -1.5], [1.5, 1.5]);
    let clipped = BoundedDiagramBuilder::new(&face).build(&diagram).unwrap();

    assert!(clipped.len() <= diagram.ridge_points.len());
    for ((i, j), _) in clipped.iter() {
        let known = diagram
            .ridge_points
            .iter()
            .any(|&(a, b)| (a.min(b), a.max(b)) == (i, j));
        assert!(known, "clipped pair ({}, {}) is not a diagram ridge", i, j);
    }
}

#[test]
fn test_ray_clip_terminates_on_face_boundary() {
    let points = vec![0.0, 0.0, -1.0, -1.0, -1.0, 1.0, 1.0, -1.0, 1.0, 1.0];
    let diagram = PlanarVoronoi::new().compute(&points).unwrap();
    let face = Face::from_box([-2.0, -2.0], [2.0, 2.0]);
    let clipped = BoundedDiagramBuilder::new(&face).build(&diagram).unwrap();

    // Everything survives inside the big square, and every hull ray has
    // collapsed to a segment ending on the |x| = 2 or |y| = 2 boundary.
    assert_eq!(clipped.len(), 8);
    for ((i, j), edge) in clipped.iter() {
        match *edge {
            Edge::Segment { a, b } => {
                if i != 0 && j != 0 {
                    let far = a[0].abs().max(a[1].abs()).max(b[0].abs()).max(b[1].abs());
                    assert!((far - 2.0).abs() < 1e-9,
                            "ray ({}, {}) should end on the face boundary, got {:?} {:?}", i, j, a, b);
                }
            }
            Edge::Ray { .. } => panic!("no ray survives a bounded face"),
        }
    }
}

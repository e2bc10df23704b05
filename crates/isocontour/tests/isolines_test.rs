//! Integration tests for isoline extraction.

use isocontour::*;

/// An `n x n` vertex grid on the unit square, two triangles per cell.
fn grid(n: u32) -> TriMesh {
    let mut positions = Vec::new();
    for j in 0..n {
        for i in 0..n {
            positions.push(Vec3::new(
                i as f32 / (n - 1) as f32,
                j as f32 / (n - 1) as f32,
                0.0,
            ));
        }
    }

    let mut indices = Vec::new();
    for j in 0..n - 1 {
        for i in 0..n - 1 {
            let v = j * n + i;
            indices.extend_from_slice(&[v, v + 1, v + n + 1, v, v + n + 1, v + n]);
        }
    }

    TriMesh::new(positions, indices)
}

fn x_values(mesh: &TriMesh) -> Vec<f32> {
    mesh.positions().unwrap().iter().map(|p| p.x).collect()
}

#[test]
fn test_straight_line_on_linear_field() {
    let mesh = grid(5);
    let values = x_values(&mesh);
    let lines = create_iso_contour_lines(&mesh, &values, &[0.4], "#ff0000", None).unwrap();

    assert_eq!(lines.segment_counts.len(), 1);
    assert_eq!(lines.colors, vec![Vec3::new(1.0, 0.0, 0.0)]);
    assert!(lines.num_segments() > 0);
    assert_eq!(lines.positions.len(), 2 * lines.num_segments());

    for p in &lines.positions {
        assert!((p.x - 0.4).abs() < 1e-5, "point {p:?} is off the isoline");
    }

    // One polyline spanning the full height of the square
    let min_y = lines.positions.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    let max_y = lines.positions.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
    assert!(min_y.abs() < 1e-5);
    assert!((max_y - 1.0).abs() < 1e-5);
}

#[test]
fn test_colors_and_segment_counts_align() {
    let mesh = grid(6);
    let values = x_values(&mesh);
    let isos = [0.1, 0.5, 2.0, 0.9];
    let lines = create_iso_contour_lines(&mesh, &values, &isos, "#000000", Some("grayscale")).unwrap();

    assert_eq!(lines.colors.len(), isos.len());
    assert_eq!(lines.segment_counts.len(), isos.len());
    // Outside the attribute range
    assert_eq!(lines.segment_counts[2], 0);
    assert_eq!(
        lines.segment_counts.iter().sum::<usize>(),
        lines.num_segments()
    );
    assert_eq!(lines.vertex_colors().len(), lines.positions.len());

    // Grayscale lookup over [0, 1]: brighter for larger iso-values
    assert!(lines.colors[0].x < lines.colors[1].x);
    assert!(lines.colors[1].x < lines.colors[3].x);
}

#[test]
fn test_iso_on_vertex_values_has_no_nan() {
    let mesh = grid(5);
    let values = x_values(&mesh);
    // 0.5 is exactly the value of the middle column of vertices
    let lines = create_iso_contour_lines(&mesh, &values, &[0.5, 0.0, 1.0], "#000000", None).unwrap();

    for p in &lines.positions {
        assert!(p.is_finite(), "non-finite point {p:?}");
    }
    for p in &lines.positions[..2 * lines.segment_counts[0]] {
        assert!((p.x - 0.5).abs() < 1e-5);
    }
}

#[test]
fn test_closed_loop_around_peak() {
    let mesh = grid(5);
    let center = Vec3::new(0.5, 0.5, 0.0);
    let values: Vec<f32> = mesh
        .positions()
        .unwrap()
        .iter()
        .map(|p| 1.0 - (*p - center).length())
        .collect();

    let lines = create_iso_contour_lines(&mesh, &values, &[0.6], "#000000", None).unwrap();
    assert!(lines.num_segments() >= 3);

    // Every endpoint is shared by exactly two segments on a closed loop
    for (k, p) in lines.positions.iter().enumerate() {
        let shared = lines
            .positions
            .iter()
            .enumerate()
            .filter(|(j, q)| *j != k && (**q - *p).length() < 1e-5)
            .count();
        assert_eq!(shared, 1, "endpoint {p:?}");
    }
}

#[test]
fn test_empty_iso_list() {
    let mesh = grid(3);
    let values = x_values(&mesh);
    let lines = create_iso_contour_lines(&mesh, &values, &[], "#000000", None).unwrap();
    assert_eq!(lines, IsoLines::default());
}

#[test]
fn test_missing_attribute() {
    let mesh = grid(3);
    let mut extractor = IsoContourLines::new(&[0.5], "#000000", None).unwrap();
    assert!(matches!(
        extractor.run_named(&mesh, "temperature"),
        Err(ContourError::MissingAttribute(_))
    ));
}

#[test]
fn test_named_attribute() {
    let mut mesh = grid(3);
    let values = x_values(&mesh);
    mesh.add_attribute("x", values.clone()).unwrap();

    let mut extractor = IsoContourLines::new(&[0.25], "#00ff00", None).unwrap();
    let named = extractor.run_named(&mesh, "x").unwrap();
    let direct = extractor.run(&mesh, &values).unwrap();
    assert_eq!(named, direct);
    assert!(!named.is_empty());
    assert_eq!(named.flat_positions().len(), 3 * named.positions.len());
}

#[test]
fn test_attribute_size_mismatch() {
    let mesh = grid(3);
    let err = create_iso_contour_lines(&mesh, &[0.0; 4], &[0.5], "#000000", None).unwrap_err();
    assert!(matches!(
        err,
        ContourError::SizeMismatch {
            expected: 9,
            actual: 4
        }
    ));
}

#[test]
fn test_nan_vertex_emits_no_nan_points() {
    let mesh = TriMesh::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![0, 1, 2]);
    let lines = create_iso_contour_lines(&mesh, &[f32::NAN, 1.0, 0.0], &[0.5], "#000000", None)
        .unwrap();
    assert!(lines.is_empty());
    assert_eq!(lines.segment_counts, vec![0]);
    assert_eq!(lines.colors.len(), 1);
}

#[test]
fn test_nan_vertex_only_drops_its_triangles() {
    let mesh = grid(5);
    let mut values = x_values(&mesh);
    // Vertex at (0, 0) belongs to the two triangles of the first cell
    values[0] = f32::NAN;

    let lines = create_iso_contour_lines(&mesh, &values, &[0.6], "#000000", None).unwrap();
    assert!(lines.num_segments() > 0);
    for p in &lines.positions {
        assert!(p.is_finite(), "non-finite point {p:?}");
        assert!((p.x - 0.6).abs() < 1e-5);
    }
}

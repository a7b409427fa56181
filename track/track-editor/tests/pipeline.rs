//! End-to-end pipeline runs through the public API.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use approx::assert_relative_eq;
use mesh_io::{load_centerline, load_obj};
use mesh_types::MeshTopology;
use track_editor::{
    BasisEvaluation, ExportConfig, Point2, ReasonCode, TrackConfig, TrackEditor, TrackLayout,
};

fn square_scenario() -> TrackEditor {
    let mut editor = TrackEditor::new();
    for (x, y) in [(-2.0, -2.0), (2.0, -2.0), (2.0, 2.0), (-2.0, 2.0)] {
        editor.add_control_point(Point2::new(x, y));
    }
    editor
}

#[test]
fn square_scenario_counts_and_normals() {
    let mut editor = square_scenario();

    editor.generate_curve(10).expect("curve");
    assert_eq!(editor.sampled_curve().len(), 40);

    editor.compute_offsets(1.0).expect("offsets");
    assert_eq!(editor.inner_curve().len(), 40);
    assert_eq!(editor.outer_curve().len(), 40);

    editor.triangulate().expect("mesh");
    assert_eq!(editor.vertices().len(), 80);
    assert_eq!(editor.triangles().len(), 80);
    assert!(editor.mesh().has_valid_indices());

    // A counter-clockwise loop gives a ribbon wound clockwise from above
    for face in 0..editor.triangles().len() {
        let triangle = editor.mesh().triangle(face).expect("triangle");
        assert!(triangle.faces_down());
    }

    editor.compute_normals().expect("normals");
    for vertex in editor.vertices() {
        assert_relative_eq!(vertex.normal.norm(), 1.0, epsilon = 1e-3);
        assert_relative_eq!(vertex.normal.z.abs(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn edges_sit_half_width_from_centerline() {
    let mut editor = square_scenario();
    editor.generate_curve(10).unwrap();
    editor.compute_offsets(1.0).unwrap();

    let curve = editor.sampled_curve();
    for i in 0..curve.len() {
        assert_relative_eq!((editor.inner_curve()[i] - curve[i]).norm(), 0.5, epsilon = 1e-9);
        assert_relative_eq!((editor.outer_curve()[i] - curve[i]).norm(), 0.5, epsilon = 1e-9);
    }
}

#[test]
fn two_points_cannot_make_a_curve() {
    let mut editor = TrackEditor::new();
    editor.add_control_point(Point2::new(0.0, 0.0));
    editor.add_control_point(Point2::new(1.0, 0.0));

    let err = editor.generate_curve(20).unwrap_err();
    assert_eq!(err.code(), ReasonCode::InsufficientControlPoints);
    assert!(editor.sampled_curve().is_empty());
}

#[test]
fn fewer_points_after_removal_drop_previous_curve() {
    let mut editor = square_scenario();
    editor.generate_curve(20).unwrap();
    editor.remove_last_control_point();

    assert!(editor.generate_curve(20).is_err());
    assert!(editor.sampled_curve().is_empty());
}

#[test]
fn export_before_triangulation_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mesh_path = dir.path().join("track.obj");
    let mut editor = square_scenario();
    editor.generate_curve(10).unwrap();

    let err = editor.export_mesh(&mesh_path).unwrap_err();
    assert_eq!(err.code(), ReasonCode::EmptyMesh);
    assert!(!mesh_path.exists());
    assert!(!dir.path().join("track.mtl").exists());
}

#[test]
fn exported_mesh_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let mesh_path = dir.path().join("track.obj");
    let curve_path = dir.path().join("track_curve.txt");

    let mut editor = square_scenario();
    editor.rebuild(&TrackConfig::default()).unwrap();
    editor.export_mesh(&mesh_path).unwrap();
    editor.export_curve(&curve_path).unwrap();

    let mtl = std::fs::read_to_string(dir.path().join("track.mtl")).unwrap();
    assert!(mtl.contains("newmtl track_material"));
    assert!(mtl.contains("map_Kd textures/asfalto.jpg"));

    let loaded = load_obj(&mesh_path).unwrap();
    assert_eq!(loaded.vertex_count(), editor.vertices().len());
    assert_eq!(loaded.face_count(), editor.triangles().len());
    for (a, b) in loaded.vertices.iter().zip(editor.vertices()) {
        assert_relative_eq!(a.position, b.position);
        assert_relative_eq!(a.normal, b.normal);
        assert_relative_eq!(a.uv, b.uv);
    }

    let centerline = load_centerline(&curve_path).unwrap();
    assert_eq!(centerline, editor.sampled_curve());
}

#[test]
fn material_failure_does_not_fail_mesh_export() {
    let dir = tempfile::tempdir().unwrap();
    let mesh_path = dir.path().join("track.obj");

    // A directory where the material file should go makes its write fail
    std::fs::create_dir(dir.path().join("track.mtl")).unwrap();

    let mut editor = square_scenario();
    editor.rebuild(&TrackConfig::default()).unwrap();
    editor.export_mesh(&mesh_path).unwrap();
    assert!(mesh_path.is_file());
}

#[test]
fn export_config_controls_material() {
    let dir = tempfile::tempdir().unwrap();
    let export = ExportConfig::default()
        .with_mesh_path(dir.path().join("loop.obj"))
        .with_curve_path(dir.path().join("loop.txt"))
        .without_material();

    let mut editor = square_scenario();
    editor.rebuild(&TrackConfig::default()).unwrap();
    editor.export(&export).unwrap();

    assert!(dir.path().join("loop.obj").is_file());
    assert!(dir.path().join("loop.txt").is_file());
    assert!(!dir.path().join("loop.mtl").exists());
}

#[test]
fn unwritable_destination_reports_io() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = square_scenario();
    editor.rebuild(&TrackConfig::default()).unwrap();

    let err = editor
        .export_curve(dir.path().join("missing").join("curve.txt"))
        .unwrap_err();
    assert_eq!(err.code(), ReasonCode::Io);
}

#[test]
fn regeneration_is_idempotent() {
    let config = TrackConfig::default().with_resolution(12).with_track_width(0.6);
    let mut first = TrackEditor::from_layout(&TrackLayout::square(3.0));
    first.rebuild(&config).unwrap();

    let mut second = first.clone();
    second.rebuild(&config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn basis_policies_build_the_same_cubic_track() {
    let layout = TrackLayout::from_points(&[
        Point2::new(0.0, 0.0),
        Point2::new(4.0, -1.0),
        Point2::new(5.0, 3.0),
        Point2::new(1.0, 4.0),
        Point2::new(-2.0, 2.0),
    ]);

    let mut closed = TrackEditor::from_layout(&layout);
    closed.rebuild(&TrackConfig::default()).unwrap();

    let mut recursive = TrackEditor::from_layout(&layout);
    let config = TrackConfig::default().with_basis(BasisEvaluation::CoxDeBoor { degree: 3 });
    recursive.rebuild(&config).unwrap();

    for (a, b) in closed.vertices().iter().zip(recursive.vertices()) {
        assert_relative_eq!(a.position, b.position, epsilon = 1e-9);
        assert_relative_eq!(a.normal, b.normal, epsilon = 1e-6);
    }
}

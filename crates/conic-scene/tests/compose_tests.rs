use approx::assert_relative_eq;
use conic_geometry::{generate_curve, ConicType};
use conic_scene::compose::{CONE, CURVE, CUTTING_PLANE, FILL};
use conic_scene::{build_scene, build_scene_with, Layer, SceneOptions, ViewMode, ViewState};

#[test_log::test]
fn planar_and_cone_views_differ_in_layers() {
    let mut view = ViewState::new(ConicType::Ellipse);
    let planar = build_scene(&view);
    assert!(planar.mesh(CONE).is_none());
    assert!(planar.mesh(CUTTING_PLANE).is_none());

    view.set_view_mode(ViewMode::ConeCutting);
    let cone = build_scene(&view);
    assert!(cone.mesh(CONE).is_some());
    assert!(cone.mesh(CUTTING_PLANE).is_some());
    assert!(cone.polyline(CURVE).is_some());
}

#[test_log::test]
fn only_parabola_is_drawn_open() {
    for kind in ConicType::ALL {
        let scene = build_scene(&ViewState::new(kind));
        let curve = scene.polyline(CURVE).unwrap();
        assert_eq!(curve.closed, kind != ConicType::Parabola, "{}", kind);
        assert_eq!(curve.points.len(), 101);
    }
}

#[test_log::test]
fn cone_view_lowers_curve_and_foci() {
    let mut view = ViewState::new(ConicType::Hyperbola);
    view.set_view_mode(ViewMode::ConeCutting);
    let scene = build_scene(&view);

    let curve = scene.polyline(CURVE).unwrap();
    let base = generate_curve(ConicType::Hyperbola, view.params(), view.segments());
    for (lowered, flat) in curve.points.iter().zip(&base) {
        assert_relative_eq!(lowered.y, -3.0);
        assert_relative_eq!(lowered.x, flat.x);
        assert_relative_eq!(lowered.z, flat.z);
    }
    assert_eq!(scene.markers.len(), 2);
    assert!(scene.markers.iter().all(|m| m.center.y == -3.0));
}

#[test_log::test]
fn cutting_plane_follows_pose() {
    let mut view = ViewState::new(ConicType::Circle);
    view.set_view_mode(ViewMode::ConeCutting);
    view.set_plane_position(1.5);
    let scene = build_scene(&view);

    // circle cut with zero angle: the plane stays horizontal at the slider height
    let plane = &scene.mesh(CUTTING_PLANE).unwrap().mesh;
    assert!(plane.positions.iter().all(|p| (p.y - 1.5).abs() < 1e-12));
}

#[test_log::test]
fn fill_sits_at_curve_height() {
    let mut view = ViewState::new(ConicType::Circle);
    view.set_shown(Layer::Fill, true);
    view.set_view_mode(ViewMode::ConeCutting);
    let options = SceneOptions {
        intersection_offset: -2.0,
        ..SceneOptions::default()
    };
    let scene = build_scene_with(&view, &options);
    let fill = &scene.mesh(FILL).unwrap().mesh;
    assert!(fill.positions.iter().all(|p| p.y == -2.0));
    assert_eq!(fill.triangle_count(), 100);
}

#[test_log::test]
fn rebuilding_is_idempotent() {
    let mut view = ViewState::new(ConicType::Parabola);
    view.set_a(0.7);
    view.set_view_mode(ViewMode::ConeCutting);
    assert_eq!(build_scene(&view), build_scene(&view));
    assert_eq!(view.scene(), build_scene(&view));
}

#[test]
fn scene_json_parses() {
    let mut view = ViewState::new(ConicType::Ellipse);
    view.set_view_mode(ViewMode::ConeCutting);
    let json = build_scene(&view).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["caption"], view.equation());
    assert_eq!(value["polylines"][0]["name"], "curve");
    assert_eq!(value["meshes"].as_array().unwrap().len(), 2);
}

#[test]
fn options_file_overrides_defaults() {
    let options = SceneOptions::from_json_str(r#"{"intersection_offset": -1.0}"#).unwrap();
    let mut view = ViewState::new(ConicType::Circle);
    view.set_view_mode(ViewMode::ConeCutting);
    let scene = build_scene_with(&view, &options);
    assert!(scene.polyline(CURVE).unwrap().points.iter().all(|p| p.y == -1.0));
}

use approx::assert_relative_eq;
use conic_geometry::{focus_points, ConicType, ShapeParams, MAX_SEGMENTS};
use conic_scene::{ViewMode, ViewState};
use serde_json::json;

#[test_log::test]
fn switching_type_resets_parameters_and_plane_angle() {
    let mut view = ViewState::new(ConicType::Circle);
    view.set_view_mode(ViewMode::ConeCutting);
    view.set_a(4.1);
    view.set_h(2.0);
    view.set_plane_angle(0.9);

    view.select_type(ConicType::Ellipse);
    assert_eq!(*view.params(), ShapeParams::new(3.0, 2.0, 0.0, 0.0));
    assert_eq!(view.params().c, 0.0);
    assert_relative_eq!(view.plane().angle, 0.3);

    view.select_type(ConicType::Hyperbola);
    assert_relative_eq!(view.plane().angle, 0.7);
}

#[test_log::test]
fn planar_type_switch_keeps_plane_angle() {
    let mut view = ViewState::new(ConicType::Circle);
    view.set_plane_angle(0.8);
    view.select_type(ConicType::Parabola);
    assert_relative_eq!(view.plane().angle, 0.8);

    view.set_view_mode(ViewMode::ConeCutting);
    assert_relative_eq!(view.plane().angle, 0.5);
}

#[test_log::test]
fn ellipse_never_has_b_above_a() {
    let mut view = ViewState::new(ConicType::Ellipse);
    view.set_b(2.5);
    view.set_a(1.5);
    assert_eq!(view.params().a, 1.5);
    assert_eq!(view.params().b, 1.5);

    view.set_b(4.0);
    assert_eq!(view.params().b, 1.5);
    assert_eq!(view.b_range().max, 1.5);

    for a in [5.0, 0.5, 3.3, 0.7] {
        view.set_a(a);
        assert!(view.params().b <= view.params().a);
    }
}

#[test_log::test]
fn hyperbola_b_is_independent_of_a() {
    let mut view = ViewState::new(ConicType::Hyperbola);
    view.set_a(1.0);
    view.set_b(4.0);
    assert_eq!(view.params().b, 4.0);
}

#[test_log::test]
fn non_finite_input_is_clamped() {
    let mut view = ViewState::new(ConicType::Circle);
    view.set_k(f64::NAN);
    assert_eq!(view.params().k, -5.0);
    view.set_a(f64::INFINITY);
    assert_eq!(view.params().a, 5.0);
}

#[test_log::test]
fn equation_tracks_setters() {
    let mut view = ViewState::new(ConicType::Circle);
    assert_eq!(view.equation(), "(x - 0)² + (y - 0)² = 4");
    view.set_a(3.0);
    view.set_h(1.0);
    view.set_k(-2.0);
    assert_eq!(view.equation(), "(x - 1)² + (y - -2)² = 9");

    view.select_type(ConicType::Parabola);
    assert_eq!(view.equation(), "(y - 0) = \\frac{1}{4}(x - 0)^2");
}

#[test]
fn view_state_serializes() {
    let mut view = ViewState::new(ConicType::Ellipse);
    view.set_view_mode(ViewMode::ConeCutting);
    let json = serde_json::to_string(&view).unwrap();
    assert!(json.contains("\"cone_cutting\""));
    let back: ViewState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, view);
}

#[test_log::test]
fn loading_rejects_ellipse_wider_than_long() {
    let mut value = serde_json::to_value(ViewState::new(ConicType::Ellipse)).unwrap();
    value["params"] = json!({ "a": 1.0, "b": 3.0, "c": 0.0, "h": 0.0, "k": 0.0 });

    let loaded = serde_json::from_value::<ViewState>(value);
    let err = loaded.unwrap_err().to_string();
    assert!(err.contains("semi-minor"), "{}", err);
}

#[test_log::test]
fn loading_clamps_through_setters() {
    let mut value = serde_json::to_value(ViewState::new(ConicType::Hyperbola)).unwrap();
    value["params"] = json!({ "a": 9.0, "b": 1.0, "c": 7.0, "h": 0.0, "k": -12.0 });
    value["plane"] = json!({ "position": 6.0, "angle": 0.2 });
    value["segments"] = json!(u64::MAX);

    let view: ViewState = serde_json::from_value(value).unwrap();
    assert_eq!(*view.params(), ShapeParams::new(5.0, 1.0, 0.0, -5.0));
    assert_eq!(view.plane().position, 2.0);
    assert_eq!(view.segments(), MAX_SEGMENTS);
    assert!(focus_points(view.kind(), view.params()).iter().all(|f| f.is_finite()));
}

#[test_log::test]
fn loading_keeps_circle_round() {
    let mut value = serde_json::to_value(ViewState::new(ConicType::Circle)).unwrap();
    value["params"] = json!({ "a": 3.0, "b": 1.0, "c": 0.0, "h": 1.0, "k": 0.0 });

    let view: ViewState = serde_json::from_value(value).unwrap();
    assert_eq!(view.params().a, 3.0);
    assert_eq!(view.params().b, 3.0);
}

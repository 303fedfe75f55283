use conic_core::Tolerance;
use conic_geometry::{focus_points, generate_curve, ConicType, ShapeParams};
use conic_math::Point3;

fn parameter_grid() -> Vec<ShapeParams> {
    let mut grid = Vec::new();
    for &a in &[0.5, 1.0, 2.3, 5.0] {
        for &b in &[0.5, 1.0, 2.0] {
            for &(h, k) in &[(0.0, 0.0), (1.5, -2.0), (-3.0, 4.0)] {
                grid.push(ShapeParams::new(a, b, h, k));
            }
        }
    }
    grid
}

fn assert_all(points: &[Point3], label: &str, f: impl Fn(&Point3) -> (f64, f64)) {
    let tol = Tolerance::default();
    for (i, p) in points.iter().enumerate() {
        let (got, want) = f(p);
        assert!(
            tol.approx_eq(got, want),
            "{}: point {} ({:?}) gives {} instead of {}",
            label,
            i,
            p,
            got,
            want
        );
    }
}

#[test]
fn test_circle_points_at_radius() {
    for params in parameter_grid() {
        let pts = generate_curve(ConicType::Circle, &params, 100);
        assert_eq!(pts.len(), 101);
        assert_all(&pts, "circle", |p| {
            let r = ((p.x - params.h).powi(2) + (p.z - params.k).powi(2)).sqrt();
            (r, params.a)
        });
    }
}

#[test]
fn test_ellipse_implicit_equation() {
    for params in parameter_grid() {
        let pts = generate_curve(ConicType::Ellipse, &params, 100);
        assert_eq!(pts.len(), 101);
        assert_all(&pts, "ellipse", |p| {
            let u = (p.x - params.h) / params.a;
            let v = (p.z - params.k) / params.b;
            (u * u + v * v, 1.0)
        });
    }
}

#[test]
fn test_hyperbola_implicit_equation() {
    for params in parameter_grid() {
        let pts = generate_curve(ConicType::Hyperbola, &params, 100);
        assert_eq!(pts.len(), 101);
        assert_all(&pts, "hyperbola", |p| {
            let u = (p.x - params.h) / params.a;
            let v = (p.z - params.k) / params.b;
            (u * u - v * v, 1.0)
        });
    }
}

#[test]
fn test_parabola_explicit_equation_and_open() {
    for params in parameter_grid() {
        let pts = generate_curve(ConicType::Parabola, &params, 100);
        assert_eq!(pts.len(), 101);
        assert_all(&pts, "parabola", |p| {
            (p.z - params.k, (p.x - params.h).powi(2) / (4.0 * params.a))
        });
        assert!(!ConicType::Parabola.is_closed());
        assert!((pts[0] - pts[100]).length() > 1e-6, "parabola ends must not coincide");
    }
}

#[test]
fn test_curves_lie_on_ground_plane() {
    for kind in ConicType::ALL {
        let pts = generate_curve(kind, &ShapeParams::defaults_for(kind), 40);
        assert!(pts.iter().all(|p| p.y == 0.0), "{} left the ground plane", kind);
    }
}

#[test]
fn test_generation_is_idempotent() {
    for kind in ConicType::ALL {
        for params in parameter_grid() {
            let first = generate_curve(kind, &params, 77);
            let second = generate_curve(kind, &params, 77);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_ellipse_focus_scenario() {
    let params = ShapeParams::new(3.0, 2.0, 0.0, 0.0);
    let foci = focus_points(ConicType::Ellipse, &params);
    let root5 = 5.0f64.sqrt();
    assert!(foci.contains(&Point3::new(root5, 0.0, 0.0)));
    assert!(foci.contains(&Point3::new(-root5, 0.0, 0.0)));
}

//! Focus and vertex points derived from shape parameters.

use conic_math::{planar_to_world, Point3};

use crate::conic::{ConicType, ShapeParams};
use crate::curve::{Ellipse, Hyperbola};

/// Foci of a conic on the ground plane: none for a circle, one for a parabola, two otherwise.
///
/// The parabola focus is `(h, k + a)`, the true focus of `y - k = (x - h)^2 / (4a)`.
/// An ellipse with `b > a` yields NaN foci.
pub fn focus_points(kind: ConicType, params: &ShapeParams) -> Vec<Point3> {
    let ShapeParams { a, b, h, k, .. } = *params;
    match kind {
        ConicType::Circle => Vec::new(),
        ConicType::Ellipse => symmetric_pair(h, k, Ellipse::new(h, k, a, b).focal_distance()),
        ConicType::Hyperbola => symmetric_pair(h, k, Hyperbola::new(h, k, a, b).focal_distance()),
        ConicType::Parabola => vec![planar_to_world(h, k + a, 0.0)],
    }
}

/// Vertices on the major (transverse) axis; the parabola has its single vertex at `(h, k)`.
pub fn vertex_points(kind: ConicType, params: &ShapeParams) -> Vec<Point3> {
    let ShapeParams { a, h, k, .. } = *params;
    match kind {
        ConicType::Circle => Vec::new(),
        ConicType::Ellipse | ConicType::Hyperbola => symmetric_pair(h, k, a),
        ConicType::Parabola => vec![planar_to_world(h, k, 0.0)],
    }
}

fn symmetric_pair(h: f64, k: f64, offset: f64) -> Vec<Point3> {
    vec![
        planar_to_world(h + offset, k, 0.0),
        planar_to_world(h - offset, k, 0.0),
    ]
}

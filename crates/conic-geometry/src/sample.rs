//! Uniform sampling of conic curves into polylines.

use conic_core::traits::BoundingBox;
use conic_math::{Aabb3, Point3};
use serde::{Deserialize, Serialize};

use crate::conic::{ConicType, ShapeParams};
use crate::curve::{curve_for, Branch, Curve, Hyperbola, Parabola};
use crate::foci::{focus_points, vertex_points};

/// Sample density used by the visualization.
pub const DEFAULT_SEGMENTS: usize = 100;

/// Fewest segments that still describe a curve.
pub const MIN_SEGMENTS: usize = 2;

/// Densest sampling offered; curves stay at a couple of hundred points.
pub const MAX_SEGMENTS: usize = 200;

/// Sample a conic into `segments + 1` points on the ground plane.
///
/// * circle / ellipse: angle `2*PI*i/segments`, so the last point repeats the first
/// * parabola: planar `x = a * (4j/segments - 2)`; the curve is open
/// * hyperbola: the right branch with `t` ascending over `[-2, 2]`, then the left
///   branch with `t` descending, so one polyline runs across both branches
///
/// `segments` is clamped to `[MIN_SEGMENTS, MAX_SEGMENTS]`. Parameters are not checked:
/// a parabola with `a == 0` yields non-finite points.
pub fn generate_curve(kind: ConicType, params: &ShapeParams, segments: usize) -> Vec<Point3> {
    let requested = segments;
    let segments = requested.clamp(MIN_SEGMENTS, MAX_SEGMENTS);
    if segments != requested {
        log::warn!("{} requested with {} segments, using {}", kind, requested, segments);
    }
    let ShapeParams { a, b, h, k, .. } = *params;

    match kind {
        ConicType::Circle | ConicType::Ellipse => {
            sweep_angle(curve_for(kind, params).as_ref(), segments)
        }
        ConicType::Parabola => {
            let parabola = Parabola::new(h, k, a);
            let half = segments as f64 / 2.0;
            let quarter = segments as f64 / 4.0;
            (0..=segments)
                .map(|j| {
                    let x = ((j as f64 - half) / quarter) * a;
                    parabola.point_at(x)
                })
                .collect()
        }
        ConicType::Hyperbola => {
            let right = Hyperbola::new(h, k, a, b);
            let left = right.clone().with_branch(Branch::Left);
            let right_count = segments / 2 + 1;
            let left_count = segments + 1 - right_count;

            let mut points = Vec::with_capacity(segments + 1);
            points.extend(
                (0..right_count).map(|j| right.point_at(branch_parameter(&right, j, right_count))),
            );
            points.extend(
                (0..left_count)
                    .rev()
                    .map(|j| left.point_at(branch_parameter(&left, j, left_count))),
            );
            points
        }
    }
}

/// Evenly spaced samples over `[0, 2*PI]`, both endpoints included.
fn sweep_angle(curve: &dyn Curve, segments: usize) -> Vec<Point3> {
    let (t_min, t_max) = curve.domain();
    (0..=segments)
        .map(|i| curve.point_at(t_min + (t_max - t_min) * i as f64 / segments as f64))
        .collect()
}

/// The `j`-th of `count` evenly spaced branch parameters; a lone sample sits at the vertex.
fn branch_parameter(branch: &Hyperbola, j: usize, count: usize) -> f64 {
    if count < 2 {
        return 0.0;
    }
    let (t_min, t_max) = branch.domain();
    t_min + (t_max - t_min) * j as f64 / (count - 1) as f64
}

/// A sampled conic together with its derived points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConicSample {
    pub kind: ConicType,
    pub points: Vec<Point3>,
    /// Whether the renderer should join the last point back to the first.
    pub closed: bool,
    pub foci: Vec<Point3>,
    pub vertices: Vec<Point3>,
}

/// Sample a conic and derive its foci and vertices in one pass.
pub fn sample_conic(kind: ConicType, params: &ShapeParams, segments: usize) -> ConicSample {
    ConicSample {
        kind,
        points: generate_curve(kind, params, segments),
        closed: kind.is_closed(),
        foci: focus_points(kind, params),
        vertices: vertex_points(kind, params),
    }
}

impl ConicSample {
    /// Copy of the sample moved vertically by `dy`.
    pub fn elevated(&self, dy: f64) -> Self {
        let lift = |pts: &[Point3]| pts.iter().map(|p| *p + Point3::new(0.0, dy, 0.0)).collect();
        Self {
            kind: self.kind,
            points: lift(&self.points),
            closed: self.closed,
            foci: lift(&self.foci),
            vertices: lift(&self.vertices),
        }
    }
}

impl BoundingBox for ConicSample {
    type Point = Point3;

    fn bounding_box(&self) -> (Point3, Point3) {
        Aabb3::from_points(self.points.iter().chain(&self.foci))
            .map(|b| (b.min, b.max))
            .unwrap_or((Point3::ZERO, Point3::ZERO))
    }
}

//! Parametric conic curves drawn on the ground (XZ) plane.

mod circle;
mod ellipse;
mod hyperbola;
mod parabola;

use conic_math::Point3;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use hyperbola::{Branch, Hyperbola};
pub use parabola::Parabola;

use crate::conic::{ConicType, ShapeParams};

/// Trait for parametric curves in 3D space.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);
}

/// Build the parametric curve for a conic family.
///
/// The hyperbola is returned as its right branch; use [`Hyperbola::with_branch`]
/// for the left one.
pub fn curve_for(kind: ConicType, params: &ShapeParams) -> Box<dyn Curve> {
    let ShapeParams { a, b, h, k, .. } = *params;
    match kind {
        ConicType::Circle => Box::new(Circle::new(h, k, a)),
        ConicType::Ellipse => Box::new(Ellipse::new(h, k, a, b)),
        ConicType::Parabola => Box::new(Parabola::new(h, k, a)),
        ConicType::Hyperbola => Box::new(Hyperbola::new(h, k, a, b)),
    }
}

//! Parabola opening along planar +y.

use conic_math::{planar_to_world, Point3};
use serde::{Deserialize, Serialize};

use super::Curve;

/// The parabola `y - k = (x - h)^2 / (4a)`, parameterized directly by planar `x`.
///
/// The sampled window is `x` in `[-2a, 2a]`, independent of `h`, which is how the
/// lesson widget frames it. `a == 0` yields non-finite points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parabola {
    pub h: f64,
    pub k: f64,
    pub a: f64,
}

impl Parabola {
    pub fn new(h: f64, k: f64, a: f64) -> Self {
        Self { h, k, a }
    }

    /// Height of the curve above `k` at planar `x`.
    pub fn rise_at(&self, x: f64) -> f64 {
        let dx = x - self.h;
        dx * dx / (4.0 * self.a)
    }
}

impl Curve for Parabola {
    fn point_at(&self, x: f64) -> Point3 {
        planar_to_world(x, self.k + self.rise_at(x), 0.0)
    }

    fn domain(&self) -> (f64, f64) {
        (-2.0 * self.a, 2.0 * self.a)
    }
}

//! Axis-aligned ellipse curve.

use std::f64::consts::TAU;

use conic_math::{planar_to_world, Point3};
use serde::{Deserialize, Serialize};

use super::Curve;

/// An axis-aligned ellipse centered at planar `(h, k)`, parameterized over `[0, 2*PI]`.
///
/// `semi_major` runs along planar x, `semi_minor` along planar y.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ellipse {
    pub h: f64,
    pub k: f64,
    pub semi_major: f64,
    pub semi_minor: f64,
}

impl Ellipse {
    pub fn new(h: f64, k: f64, semi_major: f64, semi_minor: f64) -> Self {
        Self {
            h,
            k,
            semi_major,
            semi_minor,
        }
    }

    /// Distance from the center to either focus. NaN when `semi_minor > semi_major`.
    pub fn focal_distance(&self) -> f64 {
        (self.semi_major * self.semi_major - self.semi_minor * self.semi_minor).sqrt()
    }
}

impl Curve for Ellipse {
    fn point_at(&self, t: f64) -> Point3 {
        planar_to_world(
            self.h + self.semi_major * t.cos(),
            self.k + self.semi_minor * t.sin(),
            0.0,
        )
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, TAU)
    }
}

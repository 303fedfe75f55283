//! East-west opening hyperbola.

use conic_math::{planar_to_world, Point3};
use serde::{Deserialize, Serialize};

use super::Curve;

/// Parameter half-range swept on each branch.
pub const BRANCH_PARAMETER_LIMIT: f64 = 2.0;

/// Which half of the hyperbola a curve traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Branch {
    /// `x >= h`
    #[default]
    Right,
    /// `x <= h`
    Left,
}

impl Branch {
    fn sign(self) -> f64 {
        match self {
            Branch::Right => 1.0,
            Branch::Left => -1.0,
        }
    }
}

/// `(x - h)^2 / a^2 - (y - k)^2 / b^2 = 1`, one branch via `cosh`/`sinh` over `t` in `[-2, 2]`.
///
/// The left branch negates both offsets, so it is the point reflection of the right
/// branch through the center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hyperbola {
    pub h: f64,
    pub k: f64,
    pub a: f64,
    pub b: f64,
    pub branch: Branch,
}

impl Hyperbola {
    pub fn new(h: f64, k: f64, a: f64, b: f64) -> Self {
        Self {
            h,
            k,
            a,
            b,
            branch: Branch::Right,
        }
    }

    pub fn with_branch(self, branch: Branch) -> Self {
        Self { branch, ..self }
    }

    /// Distance from the center to either focus.
    pub fn focal_distance(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }
}

impl Curve for Hyperbola {
    fn point_at(&self, t: f64) -> Point3 {
        let s = self.branch.sign();
        planar_to_world(
            self.h + s * self.a * t.cosh(),
            self.k + s * self.b * t.sinh(),
            0.0,
        )
    }

    fn domain(&self) -> (f64, f64) {
        (-BRANCH_PARAMETER_LIMIT, BRANCH_PARAMETER_LIMIT)
    }
}

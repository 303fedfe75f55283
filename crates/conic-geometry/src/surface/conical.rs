//! Double-napped conical surface.

use std::f64::consts::TAU;

use conic_math::{DVec3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::Surface;

/// A finite double cone parameterized by angle `u` in `[0, 2*PI]` and signed slant distance
/// `v` in `[-slant, slant]` from the apex.
///
/// Points are computed as:
/// `P(u, v) = apex + v * (sin(half_angle) * radial(u) + cos(half_angle) * axis)`
///
/// Negative `v` traces the lower nappe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConicalSurface {
    pub apex: Point3,
    pub axis: Vector3,
    pub half_angle: f64,
    /// Slant length of each nappe.
    pub slant: f64,
}

impl ConicalSurface {
    pub fn new(apex: Point3, axis: Vector3, half_angle: f64, slant: f64) -> Self {
        Self {
            apex,
            axis: axis.normalize(),
            half_angle,
            slant,
        }
    }

    /// Double cone standing on the world Y axis, each nappe reaching `height` above or
    /// below the apex.
    pub fn upright(apex: Point3, half_angle: f64, height: f64) -> Self {
        Self::new(apex, DVec3::Y, half_angle, height / half_angle.cos())
    }

    fn local_frame(&self) -> (DVec3, DVec3) {
        let n = self.axis;
        let ref_vec = if n.x.abs() < 0.9 { DVec3::X } else { DVec3::Y };
        let u = n.cross(ref_vec).normalize();
        let v = n.cross(u).normalize();
        (u, v)
    }

    fn radial(&self, u: f64) -> DVec3 {
        let (ref_dir, cross_dir) = self.local_frame();
        u.cos() * ref_dir + u.sin() * cross_dir
    }
}

impl Surface for ConicalSurface {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let radial = self.radial(u);
        self.apex + v * (self.half_angle.sin() * radial + self.half_angle.cos() * self.axis)
    }

    fn normal_at(&self, u: f64, v: f64) -> Vector3 {
        let radial = self.radial(u);
        // below the apex the surface point sits on the -radial side
        let side = if v < 0.0 { -1.0 } else { 1.0 };
        let n = side * (self.half_angle.cos() * radial - self.half_angle.sin() * self.axis);
        let len = n.length();
        if len < 1e-15 {
            radial
        } else {
            n / len
        }
    }

    fn domain_u(&self) -> (f64, f64) {
        (0.0, TAU)
    }

    fn domain_v(&self) -> (f64, f64) {
        (-self.slant, self.slant)
    }
}

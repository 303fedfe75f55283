//! Finite planar surface.

use conic_math::{DVec3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::Surface;

/// A rectangular patch `origin + u * u_axis + v * v_axis` with `u, v` in
/// `[-half_extent, half_extent]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanarSurface {
    pub origin: Point3,
    pub u_axis: Vector3,
    pub v_axis: Vector3,
    pub half_extent: f64,
}

impl PlanarSurface {
    pub fn new(origin: Point3, u_axis: Vector3, v_axis: Vector3, half_extent: f64) -> Self {
        Self {
            origin,
            u_axis,
            v_axis,
            half_extent,
        }
    }

    /// Square of side `size` lying flat in the XZ plane, facing +Y.
    pub fn horizontal(size: f64) -> Self {
        Self::new(DVec3::ZERO, DVec3::Z, DVec3::X, size * 0.5)
    }
}

impl Surface for PlanarSurface {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        self.origin + u * self.u_axis + v * self.v_axis
    }

    fn normal_at(&self, _u: f64, _v: f64) -> Vector3 {
        let n = self.u_axis.cross(self.v_axis);
        let len = n.length();
        if len < 1e-15 {
            DVec3::Y
        } else {
            n / len
        }
    }

    fn domain_u(&self) -> (f64, f64) {
        (-self.half_extent, self.half_extent)
    }

    fn domain_v(&self) -> (f64, f64) {
        (-self.half_extent, self.half_extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_faces_up() {
        let plane = PlanarSurface::horizontal(6.0);
        assert!((plane.normal_at(0.0, 0.0) - DVec3::Y).length() < 1e-10);
        assert_eq!(plane.domain_u(), (-3.0, 3.0));
    }

    #[test]
    fn test_planar_point() {
        let plane = PlanarSurface::horizontal(2.0);
        let p = plane.point_at(1.0, 0.5);
        assert!((p - DVec3::new(0.5, 0.0, 1.0)).length() < 1e-10);
    }
}

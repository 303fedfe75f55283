//! Circle curve.

use std::f64::consts::TAU;

use conic_math::{planar_to_world, Point3};
use serde::{Deserialize, Serialize};

use super::Curve;

/// A circle of radius `radius` centered at planar `(h, k)`, parameterized over `[0, 2*PI]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    pub h: f64,
    pub k: f64,
    pub radius: f64,
}

impl Circle {
    pub fn new(h: f64, k: f64, radius: f64) -> Self {
        Self { h, k, radius }
    }
}

impl Curve for Circle {
    fn point_at(&self, t: f64) -> Point3 {
        planar_to_world(
            self.h + self.radius * t.cos(),
            self.k + self.radius * t.sin(),
            0.0,
        )
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, TAU)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_circle_points_on_circle() {
        let circle = Circle::new(1.0, -2.0, 3.0);
        for i in 0..8 {
            let t = i as f64 * PI / 4.0;
            let p = circle.point_at(t);
            let dist = ((p.x - 1.0).powi(2) + (p.z + 2.0).powi(2)).sqrt();
            assert!(
                (dist - 3.0).abs() < 1e-10,
                "Point at t={} not on circle: dist={}",
                t,
                dist
            );
            assert!(p.y.abs() < 1e-10, "Point not on the ground plane");
        }
    }

    #[test]
    fn test_circle_cardinal_points() {
        let circle = Circle::new(0.0, 0.0, 2.0);
        assert!((circle.point_at(0.0) - Point3::new(2.0, 0.0, 0.0)).length() < 1e-10);
        assert!((circle.point_at(PI / 2.0) - Point3::new(0.0, 0.0, 2.0)).length() < 1e-10);
        assert!((circle.point_at(PI) - Point3::new(-2.0, 0.0, 0.0)).length() < 1e-10);
    }

    #[test]
    fn test_circle_domain_is_full_turn() {
        let circle = Circle::new(0.0, 0.0, 1.0);
        assert_eq!(circle.domain(), (0.0, TAU));
        assert!((circle.point_at(TAU) - circle.point_at(0.0)).length() < 1e-12);
    }
}

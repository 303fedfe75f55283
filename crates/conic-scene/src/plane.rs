//! Pose of the cutting plane in the cone view.

use std::f64::consts::PI;

use conic_geometry::ConicType;
use conic_math::{Point3, Transform, Vector3};
use serde::{Deserialize, Serialize};

/// Tilt of the cutting plane from horizontal before the user angle is applied.
///
/// Circle cuts straight across the axis; the other families tilt progressively further.
pub fn base_tilt(kind: ConicType) -> f64 {
    match kind {
        ConicType::Circle => 0.0,
        ConicType::Ellipse => PI / 6.0,
        ConicType::Parabola => PI / 4.0,
        ConicType::Hyperbola => PI / 2.5,
    }
}

/// User angle the cone view starts from after a type switch.
pub fn default_plane_angle(kind: ConicType) -> f64 {
    match kind {
        ConicType::Circle => 0.0,
        ConicType::Ellipse => 0.3,
        ConicType::Parabola => 0.5,
        ConicType::Hyperbola => 0.7,
    }
}

/// Position and XYZ Euler rotation (radians) of the cutting plane.
///
/// At zero rotation the plane is horizontal with its normal along +Y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanePose {
    pub position: Point3,
    pub rotation: Vector3,
}

/// Map a conic family and the user's angle/position sliders to a plane pose.
///
/// The plane is tilted about world Z by `base_tilt(kind)` with `angle` added, except for
/// the hyperbola where it is subtracted, and lifted to `position` along the cone axis.
pub fn plane_transform(kind: ConicType, angle: f64, position: f64) -> PlanePose {
    let base = base_tilt(kind);
    let tilt = match kind {
        ConicType::Hyperbola => base - angle,
        ConicType::Circle | ConicType::Ellipse | ConicType::Parabola => base + angle,
    };
    PlanePose {
        position: Point3::new(0.0, position, 0.0),
        rotation: Vector3::new(0.0, 0.0, tilt),
    }
}

impl PlanePose {
    /// Tilt from horizontal, radians.
    pub fn tilt(&self) -> f64 {
        self.rotation.z
    }

    pub fn to_transform(&self) -> Transform {
        Transform::from_euler_translation(self.rotation, self.position)
    }

    /// Unit normal of the posed plane.
    pub fn normal(&self) -> Vector3 {
        self.to_transform().transform_vector(Vector3::Y).normalize()
    }
}

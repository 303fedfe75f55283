use conic_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D perspective camera; the host renderer orbits it interactively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    pub eye: Point3,       // camera position
    pub target: Point3,    // look-at target
    pub up: Vector3,       // up vector
    pub fov_y: f64,        // vertical FOV in radians
    pub aspect: f64,       // width/height
    pub near: f64,         // near clip plane
    pub far: f64,          // far clip plane
}

impl Default for Camera {
    /// Eye at (0, 5, 5) looking at the origin, 50° vertical FOV.
    fn default() -> Self {
        Self {
            eye: Point3::new(0.0, 5.0, 5.0),
            target: Point3::ZERO,
            up: Vector3::Y,
            fov_y: 50f64.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

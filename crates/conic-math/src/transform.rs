use serde::{Deserialize, Serialize};

use crate::{DMat4, DQuat, EulerRot, Point3, Vector3};

/// Rigid body transform (rotation + translation, no shear/scale).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    pub matrix: [f64; 16],
}

impl Transform {
    /// Rotation by XYZ Euler angles (radians) followed by a translation.
    pub fn from_euler_translation(rotation: Vector3, translation: Vector3) -> Self {
        let q = DQuat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z);
        Self::from_mat4(DMat4::from_rotation_translation(q, translation))
    }

    pub fn from_mat4(m: DMat4) -> Self {
        Self {
            matrix: m.to_cols_array(),
        }
    }

    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_cols_array(&self.matrix)
    }

    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.to_mat4().transform_point3(p)
    }

    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        self.to_mat4().transform_vector3(v)
    }
}

pub mod aabb;
pub mod transform;

pub use aabb::Aabb3;
pub use glam::{DMat4, DQuat, DVec2, DVec3, EulerRot};
pub use transform::Transform;

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector3 = DVec3;

/// Map planar curve coordinates `(x, y)` onto the world XZ plane at height `elevation`.
///
/// The visualization draws conics flat on the ground grid, so planar `y` becomes world `z`.
#[inline]
pub fn planar_to_world(x: f64, y: f64, elevation: f64) -> Point3 {
    DVec3::new(x, elevation, y)
}

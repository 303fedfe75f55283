pub mod mesh;
pub mod tessellate;

pub use mesh::TriangleMesh;
pub use tessellate::{tessellate_fan, tessellate_surface};

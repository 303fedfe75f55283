use conic_math::{Point2, Point3, Transform, Vector3};
use serde::{Deserialize, Serialize};

/// Indexed triangle mesh with per-vertex normals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub indices: Vec<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uvs: Vec<Point2>,
}

impl TriangleMesh {
    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Copy of the mesh with positions and normals mapped through `transform`.
    pub fn transformed(&self, transform: &Transform) -> TriangleMesh {
        TriangleMesh {
            positions: self
                .positions
                .iter()
                .map(|&p| transform.transform_point(p))
                .collect(),
            normals: self
                .normals
                .iter()
                .map(|&n| transform.transform_vector(n).normalize_or_zero())
                .collect(),
            indices: self.indices.clone(),
            uvs: self.uvs.clone(),
        }
    }
}

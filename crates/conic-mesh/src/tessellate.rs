//! Surface and region tessellation.

use conic_core::Tolerance;
use conic_geometry::Surface;
use conic_math::{Point2, Point3, Vector3};

use crate::TriangleMesh;

/// Tessellate a parametric surface by uniform subdivision in the UV domain.
///
/// Generates a `(u_divs+1) * (v_divs+1)` grid of vertices with positions, normals,
/// and UV coordinates, connected by `u_divs * v_divs * 2` triangles.
pub fn tessellate_surface(surface: &dyn Surface, u_divs: usize, v_divs: usize) -> TriangleMesh {
    let u_divs = u_divs.max(1);
    let v_divs = v_divs.max(1);
    let (u_min, u_max) = surface.domain_u();
    let (v_min, v_max) = surface.domain_v();

    let u_count = u_divs + 1;
    let v_count = v_divs + 1;
    let total_verts = u_count * v_count;

    let mut positions = Vec::with_capacity(total_verts);
    let mut normals = Vec::with_capacity(total_verts);
    let mut uvs = Vec::with_capacity(total_verts);

    for i in 0..u_count {
        let s = i as f64 / u_divs as f64;
        let u = u_min + (u_max - u_min) * s;
        for j in 0..v_count {
            let t = j as f64 / v_divs as f64;
            let v = v_min + (v_max - v_min) * t;
            positions.push(surface.point_at(u, v));
            normals.push(surface.normal_at(u, v));
            uvs.push(Point2::new(s, t));
        }
    }

    let idx = |ii: usize, jj: usize| -> u32 { (ii * v_count + jj) as u32 };
    let mut indices = Vec::with_capacity(u_divs * v_divs * 6);
    for i in 0..u_divs {
        for j in 0..v_divs {
            indices.extend_from_slice(&[idx(i, j), idx(i + 1, j), idx(i + 1, j + 1)]);
            indices.extend_from_slice(&[idx(i, j), idx(i + 1, j + 1), idx(i, j + 1)]);
        }
    }

    TriangleMesh {
        positions,
        normals,
        indices,
        uvs,
    }
}

/// Fill a closed outline with a triangle fan around `center`.
///
/// A trailing point equal to the first is dropped, the outline wraps back to its start,
/// and every triangle is wound so its normal agrees with `up`. Correct for outlines that
/// are star-shaped around `center` (circles and ellipses around their centers).
/// Returns an empty mesh for fewer than 3 distinct outline points.
pub fn tessellate_fan(center: Point3, outline: &[Point3], up: Vector3) -> TriangleMesh {
    let ring = match outline {
        [first, rest @ .., last] if Tolerance::default().is_zero((*last - *first).length()) => {
            &outline[..rest.len() + 1]
        }
        _ => outline,
    };
    if ring.len() < 3 {
        return TriangleMesh::default();
    }

    let up = up.normalize_or_zero();
    let mut positions = Vec::with_capacity(ring.len() + 1);
    positions.push(center);
    positions.extend_from_slice(ring);
    let normals = vec![up; positions.len()];

    let n = ring.len() as u32;
    let mut indices = Vec::with_capacity(ring.len() * 3);
    for i in 0..n {
        let a = 1 + i;
        let b = 1 + (i + 1) % n;
        let face = (positions[a as usize] - center).cross(positions[b as usize] - center);
        if face.dot(up) >= 0.0 {
            indices.extend_from_slice(&[0, a, b]);
        } else {
            indices.extend_from_slice(&[0, b, a]);
        }
    }

    TriangleMesh {
        positions,
        normals,
        indices,
        uvs: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conic_geometry::surface::{ConicalSurface, PlanarSurface};
    use conic_math::DVec3;
    use std::f64::consts::{FRAC_PI_4, TAU};

    fn ring(count: usize, closed: bool) -> Vec<Point3> {
        let last = if closed { count } else { count - 1 };
        (0..=last)
            .map(|i| {
                let angle = TAU * i as f64 / count as f64;
                DVec3::new(angle.cos(), 0.0, angle.sin())
            })
            .collect()
    }

    #[test]
    fn test_tessellate_surface_counts() {
        let plane = PlanarSurface::horizontal(2.0);
        let mesh = tessellate_surface(&plane, 4, 3);
        assert_eq!(mesh.positions.len(), 5 * 4);
        assert_eq!(mesh.triangle_count(), 4 * 3 * 2);
        assert_eq!(mesh.uvs.len(), mesh.positions.len());
    }

    #[test]
    fn test_tessellate_cone_indices_valid() {
        let cone = ConicalSurface::upright(DVec3::ZERO, FRAC_PI_4, 2.0);
        let mesh = tessellate_surface(&cone, 16, 8);
        let n = mesh.positions.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
        for n in &mesh.normals {
            assert!((n.length() - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_fan_drops_repeated_endpoint() {
        let mesh = tessellate_fan(DVec3::ZERO, &ring(8, true), DVec3::Y);
        assert_eq!(mesh.positions.len(), 9);
        assert_eq!(mesh.triangle_count(), 8);
    }

    #[test]
    fn test_fan_winding_follows_up() {
        for up in [DVec3::Y, -DVec3::Y] {
            let mesh = tessellate_fan(DVec3::ZERO, &ring(12, false), up);
            for tri in mesh.indices.chunks_exact(3) {
                let [p0, p1, p2] = [0, 1, 2].map(|i| mesh.positions[tri[i] as usize]);
                let face = (p1 - p0).cross(p2 - p0).normalize();
                assert!((face - up).length() < 1e-10, "face {:?} against {:?}", face, up);
            }
            assert!(mesh.normals.iter().all(|n| *n == up));
        }
    }

    #[test]
    fn test_fan_needs_three_points() {
        let mesh = tessellate_fan(DVec3::ZERO, &[DVec3::X, DVec3::Z], DVec3::Y);
        assert_eq!(mesh.triangle_count(), 0);
    }
}

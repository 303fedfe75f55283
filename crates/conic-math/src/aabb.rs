use serde::{Deserialize, Serialize};

use crate::{Point3, Vector3};

/// Axis-Aligned Bounding Box in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb3 {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Bounds of a point set, ignoring non-finite coordinates.
    ///
    /// Returns `None` when no finite point remains.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3>,
    {
        let mut finite = points.into_iter().filter(|p| p.is_finite());
        let first = *finite.next()?;
        let (min, max) = finite.fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn expand(&self, amount: f64) -> Self {
        let offset = Vector3::splat(amount);
        Self {
            min: self.min - offset,
            max: self.max + offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    #[test]
    fn test_from_points() {
        let pts = vec![dvec3(1.0, 2.0, 3.0), dvec3(-1.0, 5.0, 0.0), dvec3(3.0, -1.0, 2.0)];
        let aabb = Aabb3::from_points(&pts).unwrap();
        assert_eq!(aabb.min, dvec3(-1.0, -1.0, 0.0));
        assert_eq!(aabb.max, dvec3(3.0, 5.0, 3.0));
    }

    #[test]
    fn test_from_points_skips_non_finite() {
        let pts = vec![
            dvec3(f64::NAN, 0.0, 0.0),
            dvec3(1.0, 1.0, 1.0),
            dvec3(f64::INFINITY, 0.0, 0.0),
        ];
        let aabb = Aabb3::from_points(&pts).unwrap();
        assert_eq!(aabb.min, dvec3(1.0, 1.0, 1.0));
        assert_eq!(aabb.max, dvec3(1.0, 1.0, 1.0));

        assert!(Aabb3::from_points(&[dvec3(f64::NAN, 0.0, 0.0)]).is_none());
        assert!(Aabb3::from_points(&[]).is_none());
    }

    #[test]
    fn test_merge_and_expand() {
        let a = Aabb3::new(dvec3(0.0, 0.0, 0.0), dvec3(1.0, 1.0, 1.0));
        let b = Aabb3::new(dvec3(-2.0, 0.5, 0.0), dvec3(0.5, 3.0, 0.5));
        let merged = a.merge(&b).expand(1.0);
        assert_eq!(merged.min, dvec3(-3.0, -1.0, -1.0));
        assert_eq!(merged.max, dvec3(2.0, 4.0, 2.0));
    }
}

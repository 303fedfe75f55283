use crate::error::Result;

/// Validate that an entity holds parameters the geometry code can evaluate.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Compute an axis-aligned bounding box.
pub trait BoundingBox {
    type Point;
    fn bounding_box(&self) -> (Self::Point, Self::Point);
}

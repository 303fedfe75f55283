//! Lighting and ground grid shared by every scene.

use conic_math::Point3;
use serde::{Deserialize, Serialize};

/// One ambient light plus one directional light.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lighting {
    pub ambient_intensity: f32,
    pub directional_position: Point3,
    pub directional_intensity: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient_intensity: 0.5,
            directional_position: Point3::new(10.0, 10.0, 10.0),
            directional_intensity: 1.0,
        }
    }
}

/// Ground grid on the XZ plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Side length of the grid.
    pub size: f64,
    pub cell_size: f64,
    /// Every `section_size` units a heavier line is drawn.
    pub section_size: f64,
    pub cell_color: [f32; 3],
    pub section_color: [f32; 3],
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            size: 20.0,
            cell_size: 1.0,
            section_size: 5.0,
            // #6b7280 and #9ca3af
            cell_color: [0.420, 0.447, 0.502],
            section_color: [0.612, 0.639, 0.686],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stage() {
        let lighting = Lighting::default();
        assert_eq!(lighting.ambient_intensity, 0.5);
        assert_eq!(lighting.directional_position, Point3::new(10.0, 10.0, 10.0));

        let grid = GridSpec::default();
        assert_eq!((grid.size, grid.cell_size, grid.section_size), (20.0, 1.0, 5.0));
    }
}

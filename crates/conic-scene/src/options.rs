//! Scene configuration.
//!
//! `SceneOptions` holds everything a host may tune about how a view is staged.
//! Defaults reproduce the lesson widget; hosts can override any subset from JSON.

use std::f64::consts::FRAC_PI_4;

use conic_core::{ConicError, Result};
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::stage::{GridSpec, Lighting};

// ── Slider ranges ──────────────────────────────────────────────────

/// Inclusive range and step of one input slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp `value` into the range. NaN lands on `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Same range with the upper bound lowered to `max` (never below `min`).
    pub fn capped(&self, max: f64) -> Self {
        Self {
            max: self.max.min(max).max(self.min),
            ..*self
        }
    }
}

/// Radius, semi-axes, and parabola coefficient.
pub const AXIS_RANGE: SliderRange = SliderRange::new(0.5, 5.0, 0.1);
/// Center or vertex translation.
pub const OFFSET_RANGE: SliderRange = SliderRange::new(-5.0, 5.0, 0.1);
/// User angle added to (or subtracted from) the base tilt of the cutting plane, radians.
pub const PLANE_ANGLE_RANGE: SliderRange = SliderRange::new(0.0, 1.0, 0.01);
/// Height of the cutting plane along the cone axis.
pub const PLANE_POSITION_RANGE: SliderRange = SliderRange::new(-2.0, 2.0, 0.1);

// ── Colors ─────────────────────────────────────────────────────────

/// `#0EA5E9`
pub const CURVE_COLOR: [f32; 3] = [0.055, 0.647, 0.914];
/// `#F97316`
pub const FOCUS_COLOR: [f32; 3] = [0.976, 0.451, 0.086];
pub const CONE_COLOR: [f32; 3] = [0.612, 0.639, 0.686];
pub const PLANE_COLOR: [f32; 3] = [0.545, 0.361, 0.965];

/// Tunable staging of a conic scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneOptions {
    pub curve_color: [f32; 3],
    pub focus_color: [f32; 3],
    pub fill_opacity: f32,
    pub marker_radius: f64,

    pub cone_color: [f32; 3],
    pub cone_opacity: f32,
    /// Half-angle between the cone axis and its surface, radians.
    pub cone_half_angle: f64,
    /// Axial height of each nappe.
    pub cone_nappe_height: f64,
    /// Subdivisions around the cone.
    pub cone_radial_divisions: usize,
    /// Subdivisions along the cone's slant.
    pub cone_slant_divisions: usize,

    pub plane_color: [f32; 3],
    pub plane_opacity: f32,
    pub plane_size: f64,

    /// World height of the curve drawn as the cut's result in cone mode.
    pub intersection_offset: f64,

    pub camera: Camera,
    pub lighting: Lighting,
    pub grid: GridSpec,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            curve_color: CURVE_COLOR,
            focus_color: FOCUS_COLOR,
            fill_opacity: 0.25,
            marker_radius: 0.1,
            cone_color: CONE_COLOR,
            cone_opacity: 0.35,
            cone_half_angle: FRAC_PI_4,
            cone_nappe_height: 2.5,
            cone_radial_divisions: 48,
            cone_slant_divisions: 8,
            plane_color: PLANE_COLOR,
            plane_opacity: 0.5,
            plane_size: 6.0,
            intersection_offset: -3.0,
            camera: Camera::default(),
            lighting: Lighting::default(),
            grid: GridSpec::default(),
        }
    }
}

impl SceneOptions {
    /// Parse options from JSON; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: SceneOptions =
            serde_json::from_str(json).map_err(|e| ConicError::Config(e.to_string()))?;
        options.check()?;
        Ok(options)
    }

    /// Reject values the composer cannot stage.
    pub fn check(&self) -> Result<()> {
        let positive = [
            ("marker_radius", self.marker_radius),
            ("cone_nappe_height", self.cone_nappe_height),
            ("plane_size", self.plane_size),
            ("grid.size", self.grid.size),
            ("grid.cell_size", self.grid.cell_size),
        ];
        if let Some((name, value)) = positive.iter().find(|(_, v)| !(*v > 0.0 && v.is_finite())) {
            return Err(ConicError::Config(format!("{} must be positive, got {}", name, value)));
        }
        if !(self.cone_half_angle > 0.0 && self.cone_half_angle < std::f64::consts::FRAC_PI_2) {
            return Err(ConicError::Config(format!(
                "cone_half_angle must lie in (0, PI/2), got {}",
                self.cone_half_angle
            )));
        }
        if self.cone_radial_divisions < 3 || self.cone_slant_divisions < 1 {
            return Err(ConicError::Config(format!(
                "cone needs at least 3x1 divisions, got {}x{}",
                self.cone_radial_divisions, self.cone_slant_divisions
            )));
        }
        Ok(())
    }
}

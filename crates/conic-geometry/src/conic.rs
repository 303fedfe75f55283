//! Conic families and their shape parameters.

use std::fmt;
use std::str::FromStr;

use conic_core::traits::Validate;
use conic_core::{ConicError, Result};
use serde::{Deserialize, Serialize};

/// The four conic families the visualization knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConicType {
    #[default]
    Circle,
    Ellipse,
    Parabola,
    Hyperbola,
}

impl ConicType {
    /// All variants, in the order the type selector lists them.
    pub const ALL: [ConicType; 4] = [
        ConicType::Circle,
        ConicType::Ellipse,
        ConicType::Parabola,
        ConicType::Hyperbola,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ConicType::Circle => "circle",
            ConicType::Ellipse => "ellipse",
            ConicType::Parabola => "parabola",
            ConicType::Hyperbola => "hyperbola",
        }
    }

    /// Capitalized name for buttons and headings.
    pub fn label(self) -> &'static str {
        match self {
            ConicType::Circle => "Circle",
            ConicType::Ellipse => "Ellipse",
            ConicType::Parabola => "Parabola",
            ConicType::Hyperbola => "Hyperbola",
        }
    }

    /// The defining locus property, shown next to the equation.
    pub fn description(self) -> &'static str {
        match self {
            ConicType::Circle => {
                "A circle is the set of all points in a plane that are at a constant distance (radius) from a fixed point (center)."
            }
            ConicType::Ellipse => {
                "An ellipse is the set of all points in a plane such that the sum of distances from two fixed points (foci) is constant."
            }
            ConicType::Parabola => {
                "A parabola is the set of all points in a plane that are equidistant from a fixed point (focus) and a fixed line (directrix)."
            }
            ConicType::Hyperbola => {
                "A hyperbola is the set of all points in a plane such that the absolute difference of distances from two fixed points (foci) is constant."
            }
        }
    }

    /// Whether the sampled polyline is drawn with a closing segment from last to first point.
    ///
    /// The parabola is the only open family.
    pub fn is_closed(self) -> bool {
        match self {
            ConicType::Circle | ConicType::Ellipse | ConicType::Hyperbola => true,
            ConicType::Parabola => false,
        }
    }
}

impl fmt::Display for ConicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConicType {
    type Err = ConicError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        ConicType::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConicError::Parse(format!("unknown conic type '{}'", s)))
    }
}

/// Shape parameters shared by all conic families.
///
/// * `a` - radius, semi-major axis, or parabola coefficient
/// * `b` - semi-minor axis (unused by the parabola)
/// * `c` - reserved
/// * `h`, `k` - center or vertex translation in the plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShapeParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub h: f64,
    pub k: f64,
}

impl ShapeParams {
    pub fn new(a: f64, b: f64, h: f64, k: f64) -> Self {
        Self { a, b, c: 0.0, h, k }
    }

    /// Starting parameters each family is reset to when it is selected.
    pub fn defaults_for(kind: ConicType) -> Self {
        match kind {
            ConicType::Circle => Self::new(2.0, 2.0, 0.0, 0.0),
            ConicType::Ellipse => Self::new(3.0, 2.0, 0.0, 0.0),
            ConicType::Parabola => Self::new(1.0, 0.0, 0.0, 0.0),
            ConicType::Hyperbola => Self::new(2.0, 1.0, 0.0, 0.0),
        }
    }

    fn is_finite(&self) -> bool {
        [self.a, self.b, self.c, self.h, self.k]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// A conic family paired with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConicShape {
    pub kind: ConicType,
    pub params: ShapeParams,
}

impl ConicShape {
    pub fn new(kind: ConicType, params: ShapeParams) -> Self {
        Self { kind, params }
    }
}

impl Validate for ConicShape {
    /// Reject parameters that would make the generator or the focus formulas non-finite.
    fn validate(&self) -> Result<()> {
        let ShapeParams { a, b, .. } = self.params;
        if !self.params.is_finite() {
            return Err(ConicError::Geometry(format!(
                "{} parameters must be finite: {:?}",
                self.kind, self.params
            )));
        }
        match self.kind {
            ConicType::Circle if a <= 0.0 => Err(ConicError::Geometry(format!(
                "circle radius must be positive, got {}",
                a
            ))),
            ConicType::Ellipse if a <= 0.0 || b <= 0.0 => Err(ConicError::Geometry(format!(
                "ellipse semi-axes must be positive, got a={} b={}",
                a, b
            ))),
            ConicType::Ellipse if b > a => Err(ConicError::Geometry(format!(
                "ellipse semi-minor axis {} exceeds semi-major axis {}",
                b, a
            ))),
            ConicType::Parabola if a == 0.0 => Err(ConicError::Geometry(
                "parabola coefficient must be non-zero".into(),
            )),
            ConicType::Hyperbola if a <= 0.0 || b <= 0.0 => Err(ConicError::Geometry(format!(
                "hyperbola semi-axes must be positive, got a={} b={}",
                a, b
            ))),
            _ => Ok(()),
        }
    }
}

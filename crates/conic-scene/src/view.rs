//! Interactive state of one visualization widget.

use conic_core::traits::Validate;
use conic_core::{ConicError, Result};
use conic_geometry::{
    equation_string, sample_conic, ConicSample, ConicShape, ConicType, ShapeParams,
    DEFAULT_SEGMENTS, MAX_SEGMENTS, MIN_SEGMENTS,
};
use serde::{Deserialize, Serialize};

use crate::compose::build_scene_with;
use crate::options::{
    SceneOptions, SliderRange, AXIS_RANGE, OFFSET_RANGE, PLANE_ANGLE_RANGE, PLANE_POSITION_RANGE,
};
use crate::plane::{default_plane_angle, plane_transform, PlanePose};
use crate::scene::Scene;

/// How the conic is staged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// The curve alone on the ground grid.
    #[default]
    Planar,
    /// A double cone and cutting plane, with the curve shown beneath as the cut's result.
    ConeCutting,
}

/// User-controlled cutting plane sliders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CuttingPlane {
    pub position: f64,
    pub angle: f64,
}

impl Default for CuttingPlane {
    fn default() -> Self {
        Self {
            position: 1.0,
            angle: 0.0,
        }
    }
}

/// Scene layers that can be shown or hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Foci,
    Fill,
    Cone,
    Plane,
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggles {
    pub show_foci: bool,
    pub show_fill: bool,
    pub show_cone: bool,
    pub show_plane: bool,
    pub show_grid: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            show_foci: true,
            show_fill: false,
            show_cone: true,
            show_plane: true,
            show_grid: true,
        }
    }
}

impl Toggles {
    pub fn is_shown(&self, layer: Layer) -> bool {
        match layer {
            Layer::Foci => self.show_foci,
            Layer::Fill => self.show_fill,
            Layer::Cone => self.show_cone,
            Layer::Plane => self.show_plane,
            Layer::Grid => self.show_grid,
        }
    }

    fn slot(&mut self, layer: Layer) -> &mut bool {
        match layer {
            Layer::Foci => &mut self.show_foci,
            Layer::Fill => &mut self.show_fill,
            Layer::Cone => &mut self.show_cone,
            Layer::Plane => &mut self.show_plane,
            Layer::Grid => &mut self.show_grid,
        }
    }
}

/// Everything the widget lets the user change.
///
/// Fields are private: every mutation goes through a setter that clamps the value to its
/// slider range and keeps cross-field invariants (ellipse `b <= a`, circle `b == a`) in
/// the same step. Deserializing rejects shapes that fail [`Validate`] and replays the
/// rest through the same setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ViewStateRecord")]
pub struct ViewState {
    kind: ConicType,
    params: ShapeParams,
    mode: ViewMode,
    plane: CuttingPlane,
    toggles: Toggles,
    segments: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(ConicType::default())
    }
}

impl ViewState {
    /// Planar view of `kind` with its default parameters.
    pub fn new(kind: ConicType) -> Self {
        Self {
            kind,
            params: ShapeParams::defaults_for(kind),
            mode: ViewMode::Planar,
            plane: CuttingPlane {
                angle: default_plane_angle(kind),
                ..CuttingPlane::default()
            },
            toggles: Toggles::default(),
            segments: DEFAULT_SEGMENTS,
        }
    }

    pub fn kind(&self) -> ConicType {
        self.kind
    }

    pub fn params(&self) -> &ShapeParams {
        &self.params
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn plane(&self) -> CuttingPlane {
        self.plane
    }

    pub fn toggles(&self) -> Toggles {
        self.toggles
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Switch conic family: parameters go back to the family defaults and, in the cone
    /// view, so does the plane angle.
    pub fn select_type(&mut self, kind: ConicType) {
        log::debug!("conic type {} -> {}", self.kind, kind);
        self.kind = kind;
        self.params = ShapeParams::defaults_for(kind);
        if self.mode == ViewMode::ConeCutting {
            self.plane.angle = default_plane_angle(kind);
        }
    }

    /// Range the `a` slider offers for the current family.
    pub fn a_range(&self) -> SliderRange {
        AXIS_RANGE
    }

    /// Range the `b` slider offers; the ellipse caps it at the current `a`.
    pub fn b_range(&self) -> SliderRange {
        match self.kind {
            ConicType::Ellipse => AXIS_RANGE.capped(self.params.a),
            ConicType::Circle | ConicType::Parabola | ConicType::Hyperbola => AXIS_RANGE,
        }
    }

    /// Set the radius / semi-major axis / parabola coefficient.
    pub fn set_a(&mut self, value: f64) {
        let a = self.clamped(self.a_range(), value, "a");
        self.params.a = a;
        match self.kind {
            ConicType::Circle => self.params.b = a,
            ConicType::Ellipse => self.params.b = self.params.b.min(a),
            ConicType::Parabola | ConicType::Hyperbola => {}
        }
    }

    /// Set the semi-minor axis. For a circle this sets the radius; the parabola has no `b`.
    pub fn set_b(&mut self, value: f64) {
        match self.kind {
            ConicType::Circle => self.set_a(value),
            ConicType::Parabola => log::warn!("parabola has no b parameter; ignoring {}", value),
            ConicType::Ellipse | ConicType::Hyperbola => {
                self.params.b = self.clamped(self.b_range(), value, "b");
            }
        }
    }

    pub fn set_h(&mut self, value: f64) {
        self.params.h = self.clamped(OFFSET_RANGE, value, "h");
    }

    pub fn set_k(&mut self, value: f64) {
        self.params.k = self.clamped(OFFSET_RANGE, value, "k");
    }

    /// Change staging; entering the cone view starts from the family's default plane angle.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if mode == ViewMode::ConeCutting && self.mode != ViewMode::ConeCutting {
            self.plane.angle = default_plane_angle(self.kind);
        }
        self.mode = mode;
    }

    pub fn set_plane_angle(&mut self, angle: f64) {
        self.plane.angle = self.clamped(PLANE_ANGLE_RANGE, angle, "plane angle");
    }

    pub fn set_plane_position(&mut self, position: f64) {
        self.plane.position = self.clamped(PLANE_POSITION_RANGE, position, "plane position");
    }

    pub fn set_segments(&mut self, segments: usize) {
        self.segments = segments.clamp(MIN_SEGMENTS, MAX_SEGMENTS);
        if self.segments != segments {
            log::warn!("segments {} clamped to {}", segments, self.segments);
        }
    }

    pub fn set_shown(&mut self, layer: Layer, shown: bool) {
        *self.toggles.slot(layer) = shown;
    }

    pub fn toggle(&mut self, layer: Layer) {
        let slot = self.toggles.slot(layer);
        *slot = !*slot;
    }

    pub fn plane_pose(&self) -> PlanePose {
        plane_transform(self.kind, self.plane.angle, self.plane.position)
    }

    pub fn sample(&self) -> ConicSample {
        sample_conic(self.kind, &self.params, self.segments)
    }

    pub fn equation(&self) -> String {
        equation_string(self.kind, &self.params)
    }

    /// Rebuild the scene with default options.
    pub fn scene(&self) -> Scene {
        build_scene_with(self, &SceneOptions::default())
    }

    fn clamped(&self, range: SliderRange, value: f64, name: &str) -> f64 {
        let clamped = range.clamp(value);
        if clamped != value {
            log::warn!("{} {} clamped to {} for {}", name, value, clamped, self.kind);
        }
        clamped
    }
}

/// Wire form of [`ViewState`], checked and replayed through the setters on load.
#[derive(Deserialize)]
struct ViewStateRecord {
    kind: ConicType,
    params: ShapeParams,
    #[serde(default)]
    mode: ViewMode,
    #[serde(default)]
    plane: CuttingPlane,
    #[serde(default)]
    toggles: Toggles,
    #[serde(default = "default_segments")]
    segments: usize,
}

fn default_segments() -> usize {
    DEFAULT_SEGMENTS
}

impl TryFrom<ViewStateRecord> for ViewState {
    type Error = ConicError;

    fn try_from(record: ViewStateRecord) -> Result<Self> {
        ConicShape::new(record.kind, record.params).validate()?;

        let mut view = ViewState::new(record.kind);
        view.set_view_mode(record.mode);
        view.set_a(record.params.a);
        // circles derive b from a, parabolas have none
        if matches!(record.kind, ConicType::Ellipse | ConicType::Hyperbola) {
            view.set_b(record.params.b);
        }
        view.set_h(record.params.h);
        view.set_k(record.params.k);
        view.set_plane_angle(record.plane.angle);
        view.set_plane_position(record.plane.position);
        view.set_segments(record.segments);
        view.toggles = record.toggles;
        Ok(view)
    }
}

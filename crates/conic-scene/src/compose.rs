//! Turning a [`ViewState`] into a [`Scene`].

use conic_geometry::surface::{ConicalSurface, PlanarSurface};
use conic_geometry::{ConicSample, ConicType};
use conic_math::{DVec3, Point3};
use conic_mesh::{tessellate_fan, tessellate_surface};

use crate::options::SceneOptions;
use crate::scene::Scene;
use crate::view::{Layer, ViewMode, ViewState};

/// Layer names used in composed scenes.
pub const CURVE: &str = "curve";
pub const FILL: &str = "fill";
pub const FOCUS: &str = "focus";
pub const CONE: &str = "cone";
pub const CUTTING_PLANE: &str = "cutting_plane";

/// Build the scene for `view` with default options.
pub fn build_scene(view: &ViewState) -> Scene {
    build_scene_with(view, &SceneOptions::default())
}

/// Build the scene for `view`.
///
/// The planar view draws the curve on the ground plane. The cone view adds the double cone
/// and the posed cutting plane, and draws the curve lowered to `intersection_offset` as the
/// section's outcome; the actual plane/cone intersection is never computed.
pub fn build_scene_with(view: &ViewState, options: &SceneOptions) -> Scene {
    let toggles = view.toggles();
    let mut scene = Scene::new();
    scene.caption = view.equation();
    scene.camera = options.camera.clone();
    scene.lighting = options.lighting.clone();
    scene.grid = toggles.is_shown(Layer::Grid).then(|| options.grid.clone());

    let sample = view.sample();
    match view.mode() {
        ViewMode::Planar => add_curve_layers(&mut scene, view, &sample, options),
        ViewMode::ConeCutting => {
            if toggles.is_shown(Layer::Cone) {
                let cone = ConicalSurface::upright(
                    DVec3::ZERO,
                    options.cone_half_angle,
                    options.cone_nappe_height,
                );
                let mesh = tessellate_surface(
                    &cone,
                    options.cone_radial_divisions,
                    options.cone_slant_divisions * 2,
                );
                scene.add_mesh(CONE, mesh, options.cone_color, options.cone_opacity);
            }
            if toggles.is_shown(Layer::Plane) {
                let plane = PlanarSurface::horizontal(options.plane_size);
                let mesh = tessellate_surface(&plane, 1, 1)
                    .transformed(&view.plane_pose().to_transform());
                scene.add_mesh(CUTTING_PLANE, mesh, options.plane_color, options.plane_opacity);
            }
            let lowered = sample.elevated(options.intersection_offset);
            add_curve_layers(&mut scene, view, &lowered, options);
        }
    }

    log::debug!(
        "built {:?} scene for {}: {} polylines, {} meshes, {} markers",
        view.mode(),
        view.kind(),
        scene.polylines.len(),
        scene.meshes.len(),
        scene.markers.len()
    );
    scene
}

fn add_curve_layers(
    scene: &mut Scene,
    view: &ViewState,
    sample: &ConicSample,
    options: &SceneOptions,
) {
    let toggles = view.toggles();
    scene.add_polyline(CURVE, sample.points.clone(), sample.closed, options.curve_color);

    // only circles and ellipses enclose a region
    let fillable = matches!(view.kind(), ConicType::Circle | ConicType::Ellipse);
    if fillable && toggles.is_shown(Layer::Fill) {
        let params = view.params();
        let elevation = sample.points.first().map_or(0.0, |p| p.y);
        let center = Point3::new(params.h, elevation, params.k);
        let mesh = tessellate_fan(center, &sample.points, DVec3::Y);
        scene.add_mesh(FILL, mesh, options.curve_color, options.fill_opacity);
    }

    if toggles.is_shown(Layer::Foci) {
        for (i, focus) in sample.foci.iter().enumerate() {
            let name = format!("{}_{}", FOCUS, i);
            scene.add_marker(&name, *focus, options.marker_radius, options.focus_color);
        }
    }
}

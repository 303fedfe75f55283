//! Conic Lab scene composition.
//!
//! [`ViewState`] holds what the user picked; [`build_scene`] turns it into a [`Scene`]
//! that a host renderer draws or that [`Scene::export_html`] writes as a standalone page.

pub mod camera;
pub mod compose;
pub mod options;
pub mod plane;
pub mod scene;
pub mod stage;
pub mod view;

// Re-export main types
pub use camera::Camera;
pub use compose::{build_scene, build_scene_with};
pub use options::{SceneOptions, SliderRange};
pub use plane::{plane_transform, PlanePose};
pub use scene::{Scene, SceneMarker, SceneMesh, ScenePolyline};
pub use stage::{GridSpec, Lighting};
pub use view::{CuttingPlane, Layer, Toggles, ViewMode, ViewState};

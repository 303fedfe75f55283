use std::io::Write;
use std::path::Path;

use conic_core::{ConicError, Result};
use conic_math::{Aabb3, Point3};
use conic_mesh::TriangleMesh;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::stage::{GridSpec, Lighting};

/// A named polyline; `closed` asks the renderer to join the last point to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenePolyline {
    pub name: String,
    pub points: Vec<Point3>,
    pub closed: bool,
    pub color: [f32; 3],
}

/// A named triangle mesh drawn with a translucent material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneMesh {
    pub name: String,
    pub mesh: TriangleMesh,
    pub color: [f32; 3],
    pub opacity: f32,
}

/// A sphere marker, used for foci.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneMarker {
    pub name: String,
    pub center: Point3,
    pub radius: f64,
    pub color: [f32; 3],
}

/// Renderable description of one visualization frame.
///
/// Nothing here draws; a host scene graph (or the HTML export) turns it into pixels.
/// Polylines and markers added through `add_polyline`/`add_marker` hold only finite
/// points, so [`Scene::to_json`] output reads back into an equal `Scene`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Text shown with the scene, normally the conic's equation.
    pub caption: String,
    pub polylines: Vec<ScenePolyline>,
    pub meshes: Vec<SceneMesh>,
    pub markers: Vec<SceneMarker>,
    pub camera: Camera,
    pub lighting: Lighting,
    pub grid: Option<GridSpec>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self {
            caption: String::new(),
            polylines: Vec::new(),
            meshes: Vec::new(),
            markers: Vec::new(),
            camera: Camera::default(),
            lighting: Lighting::default(),
            grid: Some(GridSpec::default()),
        }
    }

    /// Add a polyline; non-finite points are dropped.
    pub fn add_polyline(
        &mut self,
        name: &str,
        mut points: Vec<Point3>,
        closed: bool,
        color: [f32; 3],
    ) {
        let total = points.len();
        points.retain(|p| p.is_finite());
        if points.len() != total {
            log::warn!("{}: dropped {} non-finite points", name, total - points.len());
        }
        self.polylines.push(ScenePolyline {
            name: name.to_string(),
            points,
            closed,
            color,
        });
    }

    pub fn add_mesh(&mut self, name: &str, mesh: TriangleMesh, color: [f32; 3], opacity: f32) {
        self.meshes.push(SceneMesh {
            name: name.to_string(),
            mesh,
            color,
            opacity,
        });
    }

    /// Add a sphere marker; a marker with a non-finite center is skipped.
    pub fn add_marker(&mut self, name: &str, center: Point3, radius: f64, color: [f32; 3]) {
        if !center.is_finite() {
            log::warn!("{}: skipping marker at {:?}", name, center);
            return;
        }
        self.markers.push(SceneMarker {
            name: name.to_string(),
            center,
            radius,
            color,
        });
    }

    pub fn polyline(&self, name: &str) -> Option<&ScenePolyline> {
        self.polylines.iter().find(|p| p.name == name)
    }

    pub fn mesh(&self, name: &str) -> Option<&SceneMesh> {
        self.meshes.iter().find(|m| m.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty() && self.meshes.is_empty() && self.markers.is_empty()
    }

    /// Bounds of every finite point in the scene; `None` for an empty scene.
    pub fn bounds(&self) -> Option<Aabb3> {
        let lines = self.polylines.iter().flat_map(|p| p.points.iter());
        let meshes = self.meshes.iter().flat_map(|m| m.mesh.positions.iter());
        let mut bounds = Aabb3::from_points(lines.chain(meshes));
        for marker in &self.markers {
            let ball = Aabb3::new(marker.center, marker.center).expand(marker.radius);
            bounds = Some(match bounds {
                Some(b) => b.merge(&ball),
                None => ball,
            });
        }
        bounds
    }

    /// Total triangle count across all meshes
    pub fn total_triangles(&self) -> usize {
        self.meshes.iter().map(|m| m.mesh.triangle_count()).sum()
    }

    /// Serialize the scene for a host renderer.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ConicError::InvalidOperation(e.to_string()))
    }

    /// Export scene as a standalone HTML file with embedded Three.js viewer
    pub fn export_html(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)?;
        self.write_html(&mut file)
    }

    /// Write the standalone HTML viewer to any writer.
    pub fn write_html<W: Write>(&self, out: &mut W) -> Result<()> {
        let data = self.to_json()?.replace("</", "<\\/");
        let polyline_count = self.polylines.len();
        let point_count: usize = self.polylines.iter().map(|p| p.points.len()).sum();

        write!(out, r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Conic Lab</title>
    <style>
        body {{
            margin: 0;
            overflow: hidden;
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: #1a1a1a;
        }}
        #container {{
            width: 100vw;
            height: 100vh;
        }}
        #info {{
            position: absolute;
            top: 10px;
            left: 10px;
            background: rgba(0, 0, 0, 0.7);
            color: white;
            padding: 15px;
            border-radius: 5px;
            font-size: 14px;
            max-width: 360px;
        }}
        #info .caption {{
            font-family: monospace;
            color: #4fc3f7;
            margin-bottom: 8px;
        }}
        #error {{
            position: absolute;
            top: 50%;
            left: 50%;
            transform: translate(-50%, -50%);
            background: rgba(200, 0, 0, 0.9);
            color: white;
            padding: 20px;
            border-radius: 5px;
            display: none;
        }}
    </style>
</head>
<body>
    <div id="container"></div>
    <div id="info">
        <div class="caption" id="caption"></div>
        <div>Curves: {polyline_count} ({point_count} points)</div>
        <div>Meshes: {} ({} triangles)</div>
        <div>Markers: {}</div>
    </div>
    <div id="error">Failed to load Three.js from CDN. Please check your internet connection.</div>

    <script src="https://cdnjs.cloudflare.com/ajax/libs/three.js/r128/three.min.js"></script>
    <script>
        if (typeof THREE === 'undefined') document.getElementById('error').style.display='block';
        const sceneData = {data};
"#,
            self.meshes.len(),
            self.total_triangles(),
            self.markers.len(),
        )?;

        out.write_all(VIEWER_SCRIPT.as_bytes())?;
        Ok(())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

const VIEWER_SCRIPT: &str = r#"
        const color = (c) => new THREE.Color(c[0], c[1], c[2]);
        const vec = (p) => new THREE.Vector3(p[0], p[1], p[2]);
        const finite = (p) => p && p.every((v) => v !== null && Number.isFinite(v));

        function initScene() {
            document.getElementById('caption').textContent = sceneData.caption;

            const scene = new THREE.Scene();
            scene.background = new THREE.Color(0x1a1a1a);

            const cam = sceneData.camera;
            const camera = new THREE.PerspectiveCamera(
                cam.fov_y * 180 / Math.PI,
                window.innerWidth / window.innerHeight,
                cam.near,
                cam.far
            );
            const center = vec(cam.target);
            camera.position.copy(vec(cam.eye));
            camera.up.copy(vec(cam.up));
            camera.lookAt(center);

            const renderer = new THREE.WebGLRenderer({ antialias: true });
            renderer.setSize(window.innerWidth, window.innerHeight);
            document.getElementById('container').appendChild(renderer.domElement);

            const light = sceneData.lighting;
            scene.add(new THREE.AmbientLight(0xffffff, light.ambient_intensity));
            const dirLight = new THREE.DirectionalLight(0xffffff, light.directional_intensity);
            dirLight.position.copy(vec(light.directional_position));
            scene.add(dirLight);

            if (sceneData.grid) {
                const g = sceneData.grid;
                const divisions = Math.max(1, Math.round(g.size / g.cell_size));
                scene.add(new THREE.GridHelper(g.size, divisions, color(g.section_color), color(g.cell_color)));
            }

            sceneData.polylines.forEach((line) => {
                const pts = line.points.filter(finite).map(vec);
                if (pts.length < 2) return;
                const geometry = new THREE.BufferGeometry().setFromPoints(pts);
                const material = new THREE.LineBasicMaterial({ color: color(line.color), linewidth: 2 });
                scene.add(line.closed ? new THREE.LineLoop(geometry, material) : new THREE.Line(geometry, material));
            });

            sceneData.meshes.forEach((data) => {
                const geometry = new THREE.BufferGeometry();
                geometry.setAttribute('position', new THREE.Float32BufferAttribute(data.mesh.positions.flat(), 3));
                geometry.setAttribute('normal', new THREE.Float32BufferAttribute(data.mesh.normals.flat(), 3));
                geometry.setIndex(data.mesh.indices);
                const material = new THREE.MeshPhongMaterial({
                    color: color(data.color),
                    transparent: data.opacity < 1,
                    opacity: data.opacity,
                    shininess: 30,
                    side: THREE.DoubleSide,
                    depthWrite: data.opacity >= 1
                });
                scene.add(new THREE.Mesh(geometry, material));
            });

            sceneData.markers.forEach((m) => {
                if (!finite(m.center)) return;
                const sphere = new THREE.Mesh(
                    new THREE.SphereGeometry(m.radius, 16, 16),
                    new THREE.MeshStandardMaterial({ color: color(m.color) })
                );
                sphere.position.copy(vec(m.center));
                scene.add(sphere);
            });

            // Simple orbit controls (mouse drag)
            let isDragging = false;
            let previousMousePosition = { x: 0, y: 0 };
            const offset = camera.position.clone().sub(center);
            let radius = offset.length();
            let theta = Math.atan2(offset.z, offset.x);
            let phi = Math.acos(offset.y / radius);

            renderer.domElement.addEventListener('mousedown', (e) => {
                isDragging = true;
                previousMousePosition = { x: e.clientX, y: e.clientY };
            });

            renderer.domElement.addEventListener('mousemove', (e) => {
                if (isDragging) {
                    theta -= (e.clientX - previousMousePosition.x) * 0.01;
                    phi = Math.max(0.1, Math.min(Math.PI - 0.1, phi + (e.clientY - previousMousePosition.y) * 0.01));
                    previousMousePosition = { x: e.clientX, y: e.clientY };
                    updateCameraPosition();
                }
            });

            renderer.domElement.addEventListener('mouseup', () => {
                isDragging = false;
            });

            renderer.domElement.addEventListener('wheel', (e) => {
                e.preventDefault();
                radius = Math.max(1, radius + e.deltaY * 0.01);
                updateCameraPosition();
            });

            function updateCameraPosition() {
                camera.position.x = center.x + radius * Math.sin(phi) * Math.cos(theta);
                camera.position.y = center.y + radius * Math.cos(phi);
                camera.position.z = center.z + radius * Math.sin(phi) * Math.sin(theta);
                camera.lookAt(center);
            }

            window.addEventListener('resize', () => {
                camera.aspect = window.innerWidth / window.innerHeight;
                camera.updateProjectionMatrix();
                renderer.setSize(window.innerWidth, window.innerHeight);
            });

            function animate() {
                requestAnimationFrame(animate);
                renderer.render(scene, camera);
            }
            animate();
        }

        if (typeof THREE !== 'undefined') initScene();
    </script>
</body>
</html>
"#;

//! JSON scene exporter.
//!
//! Captures the submitted mesh and every sphere frame, then writes the
//! whole scene to one JSON file on `finalize()`. When spheres were
//! submitted the document also carries a unit UV sphere that a viewer
//! can instance per particle.

use std::path::PathBuf;

use relief_mesh::generators::uv_sphere;
use relief_types::{ReliefError, ReliefResult};
use serde::Serialize;

use crate::buffers::{MeshBuffers, SphereInstance};
use crate::renderer::Renderer;

const SPHERE_STACKS: usize = 12;
const SPHERE_SLICES: usize = 24;

#[derive(Serialize)]
struct SphereFrame {
    frame: u64,
    spheres: Vec<SphereInstance>,
}

#[derive(Serialize)]
struct SphereTemplate {
    vertices: Vec<f32>,
    normals: Vec<f32>,
    faces: Vec<u32>,
}

#[derive(Serialize)]
struct SceneData<'a> {
    meshes: &'a [MeshBuffers],
    sphere_template: Option<SphereTemplate>,
    frames: &'a [SphereFrame],
}

/// Writes the captured scene to a JSON file.
///
/// ```text
/// let mut exporter = JsonSceneExporter::new("scene.json");
/// exporter.submit_mesh(&MeshBuffers::from_terrain(&terrain))?;
/// exporter.finalize()?;
/// ```
pub struct JsonSceneExporter {
    output_path: PathBuf,
    meshes: Vec<MeshBuffers>,
    frames: Vec<SphereFrame>,
}

impl JsonSceneExporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            meshes: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Serializes everything captured so far.
    pub fn to_json(&self) -> ReliefResult<String> {
        let sphere_template = (!self.frames.is_empty()).then(|| {
            let sphere = uv_sphere(1.0, SPHERE_STACKS, SPHERE_SLICES);
            SphereTemplate {
                vertices: sphere.positions_interleaved(),
                normals: sphere.normals_interleaved(),
                faces: sphere.indices,
            }
        });
        let scene = SceneData {
            meshes: &self.meshes,
            sphere_template,
            frames: &self.frames,
        };
        serde_json::to_string(&scene)
            .map_err(|e| ReliefError::Serialization(format!("JSON serialization failed: {e}")))
    }
}

impl Renderer for JsonSceneExporter {
    fn submit_mesh(&mut self, mesh: &MeshBuffers) -> ReliefResult<()> {
        self.meshes.push(mesh.clone());
        Ok(())
    }

    fn submit_spheres(&mut self, frame: u64, spheres: &[SphereInstance]) -> ReliefResult<()> {
        self.frames.push(SphereFrame {
            frame,
            spheres: spheres.to_vec(),
        });
        Ok(())
    }

    fn finalize(&mut self) -> ReliefResult<()> {
        let json = self.to_json()?;
        std::fs::write(&self.output_path, json)?;
        tracing::info!(
            path = %self.output_path.display(),
            meshes = self.meshes.len(),
            frames = self.frames.len(),
            "scene exported"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u64 {
        self.frames.len() as u64
    }
}

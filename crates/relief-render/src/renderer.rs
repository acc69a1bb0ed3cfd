//! Renderer trait and HeadlessRenderer.
//!
//! A renderer receives the static mesh once and a set of sphere
//! instances every frame. The headless renderer only counts what it
//! receives, serving as a no-op for benchmarks and CI.

use relief_types::ReliefResult;

use crate::buffers::{MeshBuffers, SphereInstance};

/// Trait for presenting terrain and particle output.
///
/// # Implementations
/// - [`HeadlessRenderer`] — Discards everything
/// - [`JsonSceneExporter`](crate::JsonSceneExporter) — Writes a JSON scene on `finalize`
pub trait Renderer: Send {
    /// Submit a static mesh (terrain or loaded model).
    fn submit_mesh(&mut self, mesh: &MeshBuffers) -> ReliefResult<()>;

    /// Submit the spheres of one particle frame.
    fn submit_spheres(&mut self, frame: u64, spheres: &[SphereInstance]) -> ReliefResult<()>;

    /// Flush buffers, write files.
    fn finalize(&mut self) -> ReliefResult<()>;

    fn name(&self) -> &str;

    /// Number of sphere frames submitted.
    fn frame_count(&self) -> u64;
}

/// Headless renderer — discards all input.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    meshes: u32,
    frames: u64,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of meshes submitted.
    pub fn mesh_count(&self) -> u32 {
        self.meshes
    }
}

impl Renderer for HeadlessRenderer {
    fn submit_mesh(&mut self, _mesh: &MeshBuffers) -> ReliefResult<()> {
        self.meshes += 1;
        Ok(())
    }

    fn submit_spheres(&mut self, _frame: u64, _spheres: &[SphereInstance]) -> ReliefResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> ReliefResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u64 {
        self.frames
    }
}

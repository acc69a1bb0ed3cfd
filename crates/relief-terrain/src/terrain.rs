//! The finished terrain mesh.
//!
//! Construction runs the whole pipeline once:
//!
//! ```text
//! flat grid ─▶ wireframe edges ─▶ fault passes ─▶ vertex normals ─▶ height range
//! ```
//!
//! Afterwards the terrain is read-only.

use std::time::Instant;

use relief_math::{RandomSource, SeededRandom};
use relief_mesh::edges::wireframe_edges;
use relief_mesh::generators::footprint_grid;
use relief_mesh::normals::compute_vertex_normals;
use relief_mesh::TriangleMesh;
use relief_types::ReliefResult;

use crate::config::TerrainConfig;
use crate::fault::{apply_fault, FaultLine, FaultPassReport, FaultSchedule};

/// A faulted heightfield mesh with smooth normals.
#[derive(Debug, Clone)]
pub struct Terrain {
    config: TerrainConfig,
    mesh: TriangleMesh,
    edges: Vec<u32>,
    min_height: f32,
    max_height: f32,
}

impl Terrain {
    /// Builds a terrain, drawing fault lines from `rng`.
    ///
    /// `config.seed` is ignored; the caller owns the random sequence.
    pub fn generate(config: &TerrainConfig, rng: &mut dyn RandomSource) -> ReliefResult<Self> {
        Self::generate_observed(config, rng, |_| {})
    }

    /// Like [`Terrain::generate`], calling `on_pass` after every fault pass.
    pub fn generate_observed(
        config: &TerrainConfig,
        rng: &mut dyn RandomSource,
        mut on_pass: impl FnMut(&FaultPassReport),
    ) -> ReliefResult<Self> {
        config.validate()?;
        let start = Instant::now();

        let mut mesh = footprint_grid(config.resolution, &config.footprint)?;
        let edges = wireframe_edges(&mesh.indices);

        let schedule = FaultSchedule::new(config.initial_delta, config.iterations);
        for (i, delta) in schedule.deltas().enumerate() {
            let fault = FaultLine::random(&config.footprint, rng);
            let moved = apply_fault(&mut mesh, &fault, delta);
            tracing::trace!(pass = i, delta, moved, "fault applied");
            on_pass(&FaultPassReport {
                iteration: i as u32,
                delta,
                moved,
            });
        }

        compute_vertex_normals(&mut mesh);

        let (min_height, max_height) = mesh.height_range().unwrap_or((0.0, 0.0));

        tracing::info!(
            vertices = mesh.vertex_count(),
            faces = mesh.triangle_count(),
            faults = config.iterations,
            min_height,
            max_height,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "terrain generated"
        );

        Ok(Self {
            config: config.clone(),
            mesh,
            edges,
            min_height,
            max_height,
        })
    }

    /// Builds a terrain from `config.seed`, or from OS entropy if unset.
    pub fn from_config(config: &TerrainConfig) -> ReliefResult<Self> {
        Self::from_config_observed(config, |_| {})
    }

    /// Like [`Terrain::from_config`], calling `on_pass` after every fault pass.
    pub fn from_config_observed(
        config: &TerrainConfig,
        on_pass: impl FnMut(&FaultPassReport),
    ) -> ReliefResult<Self> {
        let mut rng = SeededRandom::from_optional_seed(config.seed);
        Self::generate_observed(config, &mut rng, on_pass)
    }

    /// Configuration the terrain was built from.
    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Underlying SoA mesh.
    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    /// Grid resolution (quads per axis).
    pub fn resolution(&self) -> u32 {
        self.config.resolution
    }

    /// Vertex positions, `[x0, y0, z0, x1, ...]`.
    pub fn vertices(&self) -> Vec<f32> {
        self.mesh.positions_interleaved()
    }

    /// Vertex normals, `[nx0, ny0, nz0, nx1, ...]`.
    pub fn normals(&self) -> Vec<f32> {
        self.mesh.normals_interleaved()
    }

    /// Triangle indices, three per face.
    pub fn faces(&self) -> &[u32] {
        &self.mesh.indices
    }

    /// Wireframe line list, two indices per edge, three edges per face.
    pub fn edges(&self) -> &[u32] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    pub fn face_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    /// Height (Y) of vertex `i`.
    pub fn height_at_vertex(&self, i: usize) -> f32 {
        self.mesh.pos_y[i]
    }

    /// Lowest vertex height.
    pub fn min_height(&self) -> f32 {
        self.min_height
    }

    /// Highest vertex height.
    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    /// Maps `height` to `[0, 1]` across the terrain's height range.
    ///
    /// A flat terrain maps everything to 0.
    pub fn normalized_height(&self, height: f32) -> f32 {
        let span = self.max_height - self.min_height;
        if span <= 0.0 {
            return 0.0;
        }
        ((height - self.min_height) / span).clamp(0.0, 1.0)
    }
}

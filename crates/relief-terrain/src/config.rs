//! Terrain configuration.

use relief_mesh::Footprint;
use relief_types::constants::{
    DEFAULT_FAULT_DELTA, DEFAULT_FAULT_ITERATIONS, DEFAULT_TERRAIN_RESOLUTION,
};
use relief_types::{ReliefError, ReliefResult};
use serde::{Deserialize, Serialize};

/// Parameters for building a [`Terrain`](crate::Terrain).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Quads per axis. The mesh has `(resolution + 1)²` vertices.
    pub resolution: u32,

    /// Number of fault passes.
    pub iterations: u32,

    /// Displacement before the first decay step.
    pub initial_delta: f32,

    /// Seed for the fault sequence. `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Rectangle in the XZ plane covered by the grid.
    pub footprint: Footprint,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_TERRAIN_RESOLUTION,
            iterations: DEFAULT_FAULT_ITERATIONS,
            initial_delta: DEFAULT_FAULT_DELTA,
            seed: None,
            footprint: Footprint::default(),
        }
    }
}

impl TerrainConfig {
    /// Small, fast config for previews and tests.
    pub fn preview() -> Self {
        Self {
            resolution: 16,
            iterations: 200,
            ..Default::default()
        }
    }

    /// Dense grid with many fine faults.
    pub fn detailed() -> Self {
        Self {
            resolution: 128,
            iterations: 5000,
            ..Default::default()
        }
    }

    /// Returns the same config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rejects parameters that would produce a degenerate mesh.
    pub fn validate(&self) -> ReliefResult<()> {
        if self.resolution < 1 {
            return Err(ReliefError::config(format!(
                "grid resolution must be at least 1, got {}",
                self.resolution
            )));
        }
        self.footprint.validate()?;
        if !self.initial_delta.is_finite() || self.initial_delta < 0.0 {
            return Err(ReliefError::config(format!(
                "initial fault delta must be finite and non-negative, got {}",
                self.initial_delta
            )));
        }
        Ok(())
    }
}

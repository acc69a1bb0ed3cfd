//! Particle state snapshots.
//!
//! A snapshot captures every particle at one frame, serialized with
//! `bincode` for compact binary output.

use relief_particles::ParticleSimulator;
use relief_types::{ReliefError, ReliefResult};
use serde::{Deserialize, Serialize};

/// All particle state at one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleSnapshot {
    /// Frame index when the snapshot was taken.
    pub frame: u64,
    /// Simulated time in seconds.
    pub sim_time: f64,
    /// Flat `[x0, y0, z0, x1, ...]`.
    pub positions: Vec<f32>,
    /// Flat `[vx0, vy0, vz0, ...]`.
    pub velocities: Vec<f32>,
    pub radii: Vec<f32>,
    pub moving: Vec<bool>,
}

impl ParticleSnapshot {
    /// Captures the simulator's current state.
    pub fn from_simulator(sim: &ParticleSimulator) -> Self {
        let particles = sim.particles();
        let n = particles.len();
        let mut positions = Vec::with_capacity(n * 3);
        let mut velocities = Vec::with_capacity(n * 3);
        let mut radii = Vec::with_capacity(n);
        let mut moving = Vec::with_capacity(n);

        for p in particles {
            positions.extend_from_slice(&p.position.to_array());
            velocities.extend_from_slice(&p.velocity.to_array());
            radii.push(p.radius());
            moving.push(p.is_moving());
        }

        Self {
            frame: sim.frame(),
            sim_time: sim.sim_time(),
            positions,
            velocities,
            radii,
            moving,
        }
    }

    pub fn particle_count(&self) -> usize {
        self.radii.len()
    }

    /// Particles still in motion.
    pub fn moving_count(&self) -> usize {
        self.moving.iter().filter(|&&m| m).count()
    }

    /// Position of particle `i`.
    pub fn position(&self, i: usize) -> Option<[f32; 3]> {
        let p = self.positions.get(3 * i..3 * i + 3)?;
        Some([p[0], p[1], p[2]])
    }

    /// Largest speed over all particles.
    pub fn max_speed(&self) -> f32 {
        self.velocities
            .chunks_exact(3)
            .map(|v| (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt())
            .fold(0.0, f32::max)
    }

    /// Checks that all per-particle arrays agree in length.
    pub fn validate(&self) -> ReliefResult<()> {
        let n = self.radii.len();
        if self.positions.len() != 3 * n || self.velocities.len() != 3 * n || self.moving.len() != n {
            return Err(ReliefError::Serialization(format!(
                "inconsistent snapshot: {} radii, {} position floats, {} velocity floats, {} flags",
                n,
                self.positions.len(),
                self.velocities.len(),
                self.moving.len()
            )));
        }
        Ok(())
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> ReliefResult<Vec<u8>> {
        bincode::serialize(self)
            .map_err(|e| ReliefError::Serialization(format!("snapshot serialization failed: {e}")))
    }

    /// Deserializes and validates a snapshot.
    pub fn from_bytes(data: &[u8]) -> ReliefResult<Self> {
        let snapshot: Self = bincode::deserialize(data).map_err(|e| {
            ReliefError::Serialization(format!("snapshot deserialization failed: {e}"))
        })?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Writes the snapshot to `path`.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> ReliefResult<()> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    /// Reads a snapshot from `path`.
    pub fn load(path: impl AsRef<std::path::Path>) -> ReliefResult<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }
}

//! Particle simulation configuration.
//!
//! Container size, frame-to-frame integration constants, collision
//! response, and the ranges particles are spawned from.

use relief_math::Vec3;
use relief_types::constants::{
    DEFAULT_COLLISION_SCALE, DEFAULT_CONTAINER_HALF_WIDTH, DEFAULT_DRAG_CONSTANT,
    DEFAULT_FLOOR_THRESHOLD, DEFAULT_PARTICLE_COUNT, DEFAULT_STOP_DISTANCE, DEFAULT_TIME_SCALE,
    GRAVITY,
};
use relief_types::{ReliefError, ReliefResult};
use serde::{Deserialize, Serialize};

use crate::container::Container;

/// How a particle is placed after it penetrates a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Discard the tick's displacement and keep the pre-tick position.
    #[default]
    RejectStep,
    /// Advance to the contact time, reflect, then spend the rest of `dt`
    /// on the reflected velocity.
    TimeOfImpact,
}

/// Configuration for a [`ParticleSimulator`](crate::ParticleSimulator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Number of particles `populate` spawns.
    pub count: usize,

    /// Half-width `m` of the cubical container centred at the origin.
    pub half_width: f32,

    /// Gravity vector [gx, gy, gz] in m/s².
    pub gravity: [f32; 3],

    /// Velocity retained per simulated second. Each frame applies `drag_constant^dt`.
    pub drag_constant: f32,

    /// Speed kept after a wall bounce, in `(0, 1]`.
    pub collision_scale: f32,

    /// Displacement per tick under which a particle on the floor is put to rest.
    pub stop_distance: f32,

    /// Gap between a particle's lowest point and the floor under which
    /// the rest check applies.
    pub floor_threshold: f32,

    /// Host milliseconds to simulated seconds.
    pub time_scale: f32,

    /// Smallest spawned radius.
    pub min_radius: f32,

    /// Spawned radii are `min_radius + [0, radius_spread · half_width)`.
    pub radius_spread: f32,

    /// Spawned velocity components are uniform in `±half_width · speed_factor`.
    pub speed_factor: f32,

    /// Wall response placement.
    pub collision_policy: CollisionPolicy,

    /// Seed for spawning. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_PARTICLE_COUNT,
            half_width: DEFAULT_CONTAINER_HALF_WIDTH,
            gravity: [0.0, -GRAVITY, 0.0],
            drag_constant: DEFAULT_DRAG_CONSTANT,
            collision_scale: DEFAULT_COLLISION_SCALE,
            stop_distance: DEFAULT_STOP_DISTANCE,
            floor_threshold: DEFAULT_FLOOR_THRESHOLD,
            time_scale: DEFAULT_TIME_SCALE,
            min_radius: 0.1,
            radius_spread: 0.2,
            speed_factor: 10.0,
            collision_policy: CollisionPolicy::RejectStep,
            seed: None,
        }
    }
}

impl ParticleConfig {
    /// Few slow particles, handy for watching individual bounces.
    pub fn gentle() -> Self {
        Self {
            count: 5,
            speed_factor: 1.0,
            ..Default::default()
        }
    }

    /// Many particles with heavier losses so the box settles quickly.
    pub fn crowded() -> Self {
        Self {
            count: 200,
            collision_scale: 0.8,
            drag_constant: 0.9,
            ..Default::default()
        }
    }

    /// Returns the same config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Gravity as a vector.
    #[inline]
    pub fn gravity_vec(&self) -> Vec3 {
        Vec3::from(self.gravity)
    }

    /// Multiplicative velocity decay for a frame of length `dt`.
    #[inline]
    pub fn drag_factor(&self, dt: f32) -> f32 {
        self.drag_constant.powf(dt)
    }

    /// Velocity gained from gravity over a frame of length `dt`.
    #[inline]
    pub fn velocity_increment(&self, dt: f32) -> Vec3 {
        self.gravity_vec() * dt
    }

    /// Largest radius `spawn` can produce.
    pub fn max_spawn_radius(&self) -> f32 {
        self.min_radius + self.radius_spread * self.half_width
    }

    /// The container described by `half_width`.
    pub fn container(&self) -> ReliefResult<Container> {
        Container::new(self.half_width)
    }

    /// Rejects parameters that would make the simulation degenerate.
    pub fn validate(&self) -> ReliefResult<()> {
        self.container()?;
        if !(self.collision_scale > 0.0 && self.collision_scale <= 1.0) {
            return Err(ReliefError::config(format!(
                "collision scale must be in (0, 1], got {}",
                self.collision_scale
            )));
        }
        if !(self.drag_constant > 0.0 && self.drag_constant <= 1.0) {
            return Err(ReliefError::config(format!(
                "drag constant must be in (0, 1], got {}",
                self.drag_constant
            )));
        }
        if !(self.time_scale > 0.0 && self.time_scale.is_finite()) {
            return Err(ReliefError::config(format!(
                "time scale must be positive, got {}",
                self.time_scale
            )));
        }
        if self.gravity.iter().any(|g| !g.is_finite()) {
            return Err(ReliefError::config(format!(
                "gravity must be finite, got {:?}",
                self.gravity
            )));
        }
        if !(self.stop_distance >= 0.0) || !(self.floor_threshold >= 0.0) {
            return Err(ReliefError::config(format!(
                "rest thresholds must be non-negative, got stop distance {} and floor threshold {}",
                self.stop_distance, self.floor_threshold
            )));
        }
        if !(self.min_radius > 0.0) || !(self.radius_spread >= 0.0) {
            return Err(ReliefError::config(format!(
                "spawn radius range must be positive, got {} + {}·m",
                self.min_radius, self.radius_spread
            )));
        }
        if self.max_spawn_radius() >= self.half_width {
            return Err(ReliefError::config(format!(
                "spawned particles (radius up to {}) would not fit in a container of half-width {}",
                self.max_spawn_radius(),
                self.half_width
            )));
        }
        if !(self.speed_factor >= 0.0 && self.speed_factor.is_finite()) {
            return Err(ReliefError::config(format!(
                "speed factor must be finite and non-negative, got {}",
                self.speed_factor
            )));
        }
        Ok(())
    }
}

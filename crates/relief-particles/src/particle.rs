//! A single sphere particle and its per-tick physics step.
//!
//! One call to [`Particle::physics`] runs:
//!
//! ```text
//! integrate ─▶ rest check ─▶ deepest wall ─▶ reflect + place
//! ```
//!
//! Mass is carried but never enters the wall response: with only static
//! walls a single-body reflection does not depend on it.

use relief_math::Vec3;
use relief_types::{ReliefError, ReliefResult};
use serde::{Deserialize, Serialize};

use crate::config::{CollisionPolicy, ParticleConfig};
use crate::container::{Container, WallHit};

/// A sphere moving inside the container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    mass: f32,
    radius: f32,
    color: [f32; 3],
    moving: bool,
}

/// What a single `physics` call did. Diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepOutcome {
    /// False if the particle was already at rest and nothing happened.
    pub active: bool,
    /// The particle came to rest during this tick.
    pub settled: bool,
    /// The wall the particle was reflected off, if any.
    pub collision: Option<WallHit>,
}

impl StepOutcome {
    /// Outcome for a particle that was already at rest.
    pub const RESTING: StepOutcome = StepOutcome {
        active: false,
        settled: false,
        collision: None,
    };
}

impl Particle {
    /// Creates a moving particle.
    ///
    /// Fails if `radius` or `mass` is not a positive finite number.
    pub fn new(
        position: Vec3,
        velocity: Vec3,
        mass: f32,
        radius: f32,
        color: [f32; 3],
    ) -> ReliefResult<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(ReliefError::config(format!(
                "particle radius must be positive and finite, got {radius}"
            )));
        }
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(ReliefError::config(format!(
                "particle mass must be positive and finite, got {mass}"
            )));
        }
        if !position.is_finite() || !velocity.is_finite() {
            return Err(ReliefError::config(format!(
                "particle state must be finite, got position {position} velocity {velocity}"
            )));
        }
        Ok(Self {
            position,
            velocity,
            mass,
            radius,
            color,
            moving: true,
        })
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    /// False once the particle has settled. It never moves again.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// `½ m |v|²`.
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Advances the particle by one tick.
    ///
    /// `drag` is `drag_constant^dt` and `dv` is `gravity · dt`, both computed
    /// once per frame by the caller. Does nothing for a settled particle.
    pub fn physics(
        &mut self,
        dt: f32,
        drag: f32,
        dv: Vec3,
        container: &Container,
        config: &ParticleConfig,
    ) -> StepOutcome {
        if !self.moving {
            return StepOutcome::RESTING;
        }

        self.velocity = self.velocity * drag + dv;
        let old_position = self.position;
        self.position += self.velocity * dt;

        let mut outcome = StepOutcome {
            active: true,
            ..Default::default()
        };

        let floor_gap = self.position.y - self.radius - container.floor();
        if floor_gap < config.floor_threshold
            && self.position.distance(old_position) < config.stop_distance
        {
            self.moving = false;
            self.velocity = Vec3::ZERO;
            outcome.settled = true;
        }

        if let Some(hit) = container.deepest_penetration(self.position, self.radius) {
            match config.collision_policy {
                CollisionPolicy::RejectStep => {
                    self.velocity = reflect(self.velocity, hit) * config.collision_scale;
                    self.position = old_position;
                }
                CollisionPolicy::TimeOfImpact => {
                    self.resolve_time_of_impact(hit, old_position, dt, container, config);
                }
            }
            outcome.collision = Some(hit);
        }

        outcome
    }

    /// Moves to the contact point along the crossed axis, reflects, and
    /// spends the remaining time on the reflected velocity.
    fn resolve_time_of_impact(
        &mut self,
        hit: WallHit,
        old_position: Vec3,
        dt: f32,
        container: &Container,
        config: &ParticleConfig,
    ) {
        let axis = hit.wall.axis();
        let limit = (container.half_width() - self.radius).max(0.0);
        let contact = if hit.wall.is_positive() { limit } else { -limit };
        let approach = self.velocity[axis];

        let t_contact = if approach.abs() > f32::EPSILON {
            ((contact - old_position[axis]) / approach).clamp(0.0, dt)
        } else {
            0.0
        };

        let hit_position = old_position + self.velocity * t_contact;
        self.velocity = reflect(self.velocity, hit) * config.collision_scale;
        // A corner crossing can leave the other axes outside; clamp them back in.
        self.position = (hit_position + self.velocity * (dt - t_contact))
            .clamp(Vec3::splat(-limit), Vec3::splat(limit));
    }
}

/// `v - 2 (v · n) n` for the wall's normal.
#[inline]
fn reflect(velocity: Vec3, hit: WallHit) -> Vec3 {
    let n = hit.wall.normal();
    velocity - 2.0 * velocity.dot(n) * n
}

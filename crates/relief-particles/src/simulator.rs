//! Frame driver over a fixed particle set.
//!
//! Each frame derives `dt` from the host timestamp, computes the shared
//! drag factor and gravity increment once, then runs `physics` on every
//! particle. Particles are independent, so the update order is irrelevant.

use relief_math::{RandomSource, SeededRandom, Vec3};
use relief_types::{ParticleId, ReliefError, ReliefResult};
use serde::{Deserialize, Serialize};

use crate::clock::FrameClock;
use crate::config::ParticleConfig;
use crate::container::{Container, WallHit};
use crate::particle::Particle;

/// Fraction of the free span `m - r` spawn positions are drawn from.
const SPAWN_MARGIN: f32 = 0.99;

/// What happened during one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    /// Frame index (0-based).
    pub frame: u64,
    /// Simulated seconds this frame advanced.
    pub dt: f32,
    /// Particles reflected off a wall, with the wall crossed.
    pub collisions: Vec<(ParticleId, WallHit)>,
    /// Particles that came to rest this frame.
    pub settled: Vec<ParticleId>,
}

/// A fixed set of particles inside one container.
pub struct ParticleSimulator {
    config: ParticleConfig,
    container: Container,
    particles: Vec<Particle>,
    clock: FrameClock,
    frame: u64,
    sim_time: f64,
}

impl ParticleSimulator {
    /// Creates an empty simulator after validating `config`.
    pub fn new(config: ParticleConfig) -> ReliefResult<Self> {
        config.validate()?;
        let container = config.container()?;
        let clock = FrameClock::new(config.time_scale);
        Ok(Self {
            config,
            container,
            particles: Vec::new(),
            clock,
            frame: 0,
            sim_time: 0.0,
        })
    }

    /// Creates a simulator and spawns `config.count` particles from `config.seed`.
    pub fn from_config(config: ParticleConfig) -> ReliefResult<Self> {
        let mut rng = SeededRandom::from_optional_seed(config.seed);
        let mut sim = Self::new(config)?;
        sim.populate(&mut rng)?;
        Ok(sim)
    }

    /// Adds a particle. Fails if the sphere is too large for the container
    /// or does not start entirely inside it.
    pub fn insert(&mut self, particle: Particle) -> ReliefResult<ParticleId> {
        if particle.radius() >= self.container.half_width() {
            return Err(ReliefError::config(format!(
                "particle radius {} does not fit in a container of half-width {}",
                particle.radius(),
                self.container.half_width()
            )));
        }
        if let Some(hit) = self
            .container
            .deepest_penetration(particle.position, particle.radius())
        {
            return Err(ReliefError::config(format!(
                "particle at {} crosses the {} wall by {}",
                particle.position, hit.wall, hit.penetration
            )));
        }
        let id = ParticleId(self.particles.len() as u32);
        self.particles.push(particle);
        Ok(id)
    }

    /// Spawns one particle with a random radius, position, velocity and colour.
    ///
    /// Draw order: radius, position x/y/z, velocity x/y/z, colour r/g/b.
    pub fn spawn(&mut self, rng: &mut dyn RandomSource) -> ReliefResult<ParticleId> {
        let m = self.config.half_width;
        let radius = self.config.min_radius + self.config.radius_spread * m * rng.next_f32();

        let span = SPAWN_MARGIN * (m - radius);
        let position = Vec3::new(span * rng.signed(), span * rng.signed(), span * rng.signed());

        let speed = m * self.config.speed_factor;
        let velocity = Vec3::new(speed * rng.signed(), speed * rng.signed(), speed * rng.signed());

        let color = [rng.next_f32(), rng.next_f32(), rng.next_f32()];

        let particle = Particle::new(position, velocity, radius, radius, color)?;
        let id = self.insert(particle)?;
        tracing::trace!(particle = %id, radius, ?position, ?velocity, "particle spawned");
        Ok(id)
    }

    /// Spawns `config.count` particles.
    pub fn populate(&mut self, rng: &mut dyn RandomSource) -> ReliefResult<()> {
        for _ in 0..self.config.count {
            self.spawn(rng)?;
        }
        tracing::info!(
            particles = self.particles.len(),
            half_width = self.container.half_width(),
            "particles spawned"
        );
        Ok(())
    }

    /// Advances one frame using a host timestamp in milliseconds.
    ///
    /// The first call only primes the clock and runs with `dt = 0`.
    pub fn tick(&mut self, timestamp_ms: f64) -> FrameReport {
        let dt = self.clock.tick(timestamp_ms);
        self.step(dt)
    }

    /// Advances one frame by `dt` simulated seconds.
    pub fn step(&mut self, dt: f32) -> FrameReport {
        let drag = self.config.drag_factor(dt);
        let dv = self.config.velocity_increment(dt);

        let mut report = FrameReport {
            frame: self.frame,
            dt,
            ..Default::default()
        };

        for (i, particle) in self.particles.iter_mut().enumerate() {
            let id = ParticleId(i as u32);
            let outcome = particle.physics(dt, drag, dv, &self.container, &self.config);
            if outcome.settled {
                tracing::trace!(particle = %id, position = ?particle.position, "particle settled");
                report.settled.push(id);
            }
            if let Some(hit) = outcome.collision {
                tracing::trace!(
                    particle = %id,
                    wall = %hit.wall,
                    penetration = hit.penetration,
                    "wall collision"
                );
                report.collisions.push((id, hit));
            }
        }

        tracing::debug!(
            frame = self.frame,
            dt,
            collisions = report.collisions.len(),
            settled = report.settled.len(),
            moving = self.moving_count(),
            "frame stepped"
        );

        self.frame += 1;
        self.sim_time += dt as f64;
        report
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    /// All particles, indexed by [`ParticleId`].
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Number of particles that have not settled.
    pub fn moving_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_moving()).count()
    }

    /// Frames stepped so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Total simulated seconds.
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Total `½ m |v|²` over all particles. Reported only.
    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(|p| p.kinetic_energy() as f64).sum()
    }
}
